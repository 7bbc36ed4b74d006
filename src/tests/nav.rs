use super::{section_number, NavigationNode, NavigationTree};
use crate::fixtures::gkr_book;

#[test]
fn test_numbering_skips_affixes() {
    let tree = NavigationTree::new(vec![
        NavigationNode::affix("Introduction", "index.html"),
        NavigationNode::chapter("Quickstart", "quickstart.html"),
        NavigationNode::chapter("Theory", "theory.html").with_children(vec![
            NavigationNode::chapter("Claims", "claims.html"),
            NavigationNode::affix("Aside", "aside.html"),
            NavigationNode::chapter("Proof", "proof.html"),
        ]),
        NavigationNode::affix("Contributors", "contributors.html"),
    ]);

    let numbers: Vec<(usize, Option<String>)> = tree
        .flatten()
        .into_iter()
        .map(|entry| (entry.depth, entry.number))
        .collect();
    assert_eq!(
        numbers,
        vec![
            (0, None),
            (0, Some("1.".to_string())),
            (0, Some("2.".to_string())),
            (1, Some("2.1.".to_string())),
            (1, None),
            (1, Some("2.2.".to_string())),
            (0, None),
        ]
    );
    assert_eq!(tree.len(), 7);
}

#[test]
fn test_section_number() {
    assert_eq!(section_number(None, 3), "3.");
    assert_eq!(section_number(Some("3.1."), 2), "3.1.2.");
}

#[test]
fn test_neighbours_follow_reading_order() {
    let tree = gkr_book();

    assert_eq!(
        tree.neighbours("gkr_background/encoding_layers.html"),
        (
            Some("gkr_background/sumcheck.html"),
            Some("gkr_theory/theory_overview.html")
        )
    );
    assert_eq!(tree.neighbours("quickstart.html").0, None);
    assert_eq!(tree.neighbours("frontend/lookup.html").1, None);
    assert_eq!(tree.neighbours("missing.html"), (None, None));
}

#[test]
fn test_neighbours_skip_drafts() {
    let tree = NavigationTree::new(vec![
        NavigationNode::chapter("One", "one.html"),
        NavigationNode::chapter("Soon", ""),
        NavigationNode::chapter("Two", "two.html"),
    ]);
    assert_eq!(tree.neighbours("one.html").1, Some("two.html"));
    assert!(tree.chapters[1].is_draft());
}

#[test]
fn test_json_defaults() {
    let tree: NavigationTree = serde_json::from_str(
        r#"{"chapters": [
            {"label": "Intro", "href": "index.html", "numbered": false},
            {"label": "Layers", "href": "layers.html", "children": [
                {"label": "Matmult", "href": "layers/matmult.html"}
            ]},
            {"label": "Later"}
        ]}"#,
    )
    .unwrap();

    assert!(!tree.chapters[0].numbered);
    assert!(tree.chapters[1].numbered);
    assert_eq!(tree.chapters[1].children[0].href, "layers/matmult.html");
    assert!(tree.chapters[2].is_draft());
    assert_eq!(tree.len(), 4);
}
