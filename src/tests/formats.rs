use crate::error::Error;
use crate::formats::summary::{output_path, parse_links, SummaryFormat};
use crate::formats::{self, Format};
use crate::nav::NavigationNode;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const SUMMARY: &str = "# Summary

[Introduction](README.md)

- [Quickstart](quickstart.md)
- [GKR Background](gkr_background/gkr_background.md)
    - [Sumcheck](gkr_background/sumcheck.md)
    - [Encoding Layers]()
- [Lookups](frontend/lookup.md#tables)

---

[Contributors](misc/contributors.md)
";

#[test]
fn test_parse_summary() {
    let tree = SummaryFormat.parse_tree(SUMMARY).unwrap();

    assert_eq!(
        tree.chapters,
        vec![
            NavigationNode::affix("Introduction", "index.html"),
            NavigationNode::chapter("Quickstart", "quickstart.html"),
            NavigationNode::chapter("GKR Background", "gkr_background/gkr_background.html")
                .with_children(vec![
                    NavigationNode::chapter("Sumcheck", "gkr_background/sumcheck.html"),
                    NavigationNode::chapter("Encoding Layers", ""),
                ]),
            NavigationNode::chapter("Lookups", "frontend/lookup.html#tables"),
            NavigationNode::affix("Contributors", "misc/contributors.html"),
        ]
    );
}

#[test]
fn test_summary_numbering() {
    let tree = SummaryFormat.parse_tree(SUMMARY).unwrap();
    let numbers: Vec<Option<String>> = tree.flatten().into_iter().map(|e| e.number).collect();

    assert_eq!(
        numbers,
        vec![
            None,
            Some("1.".to_string()),
            Some("2.".to_string()),
            Some("2.1.".to_string()),
            Some("2.2.".to_string()),
            Some("3.".to_string()),
            None,
        ]
    );
}

#[test]
fn test_list_item_without_link_is_an_error() {
    let err = SummaryFormat
        .parse_tree("- [Quickstart](quickstart.md)\n- Just some words\n")
        .unwrap_err();
    match err {
        Error::Summary { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_links() {
    assert_eq!(
        parse_links("[Canonic [\"Gate\"] GKR](canonic.md) then [Claims]( claims.md )"),
        vec![
            ("Canonic [\"Gate\"] GKR".to_string(), "canonic.md".to_string()),
            ("Claims".to_string(), "claims.md".to_string()),
        ]
    );
    assert!(parse_links("[not a link] and (nor this)").is_empty());
    assert!(parse_links("[unclosed").is_empty());
}

#[test]
fn test_output_paths() {
    assert_eq!(output_path("README.md"), "index.html");
    assert_eq!(output_path("hyrax/README.md"), "hyrax/index.html");
    assert_eq!(output_path("hyrax/hyrax.md"), "hyrax/hyrax.html");
    assert_eq!(output_path("claims.md#aggregation"), "claims.html#aggregation");
    assert_eq!(output_path("notREADME.md"), "notREADME.html");
    assert_eq!(output_path(""), "");
}

#[test]
fn test_format_is_chosen_by_extension() {
    assert!(formats::for_path(Path::new("src/SUMMARY.md")).is_ok());
    assert!(formats::for_path(Path::new("book/toc.JSON")).is_ok());
    assert!(matches!(
        formats::for_path(Path::new("book/toc.yaml")),
        Err(Error::UnknownFormat(_))
    ));
    assert!(matches!(
        formats::for_path(Path::new("SUMMARY")),
        Err(Error::UnknownFormat(_))
    ));
}

#[test]
fn test_load_tree_from_files() {
    let dir = tempdir().unwrap();

    let summary = dir.path().join("SUMMARY.md");
    fs::write(&summary, SUMMARY).unwrap();
    assert_eq!(formats::load_tree(&summary).unwrap().len(), 7);

    let json = dir.path().join("toc.json");
    fs::write(
        &json,
        r#"{"chapters": [{"label": "Quickstart", "href": "quickstart.html"}]}"#,
    )
    .unwrap();
    let tree = formats::load_tree(&json).unwrap();
    assert_eq!(tree.chapters[0].label, "Quickstart");

    let missing = dir.path().join("missing.json");
    assert!(matches!(formats::load_tree(&missing), Err(Error::Io(_))));
}
