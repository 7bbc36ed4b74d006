use super::Dom;

#[test]
fn test_class_list_behaves_like_a_set() {
    let mut dom = Dom::new("div");
    let li = dom.append_element(dom.root(), "li");

    dom.add_class(li, "chapter-item");
    dom.add_class(li, "chapter-item");
    assert_eq!(dom.classes(li), ["chapter-item".to_string()]);

    assert!(dom.toggle_class(li, "expanded"));
    assert!(dom.has_class(li, "expanded"));
    assert!(!dom.toggle_class(li, "expanded"));
    assert!(!dom.has_class(li, "expanded"));
}

#[test]
fn test_previous_element_sibling_skips_text() {
    let mut dom = Dom::new("ol");
    let root = dom.root();
    let first = dom.append_element(root, "li");
    dom.append_text(root, "\n  ");
    let second = dom.append_element(root, "li");

    assert_eq!(dom.previous_element_sibling(second), Some(first));
    assert_eq!(dom.previous_element_sibling(first), None);
    assert_eq!(dom.previous_element_sibling(root), None);
}

#[test]
fn test_closest_and_contains() {
    let mut dom = Dom::new("nav");
    let li = dom.append_element(dom.root(), "li");
    let a = dom.append_element(li, "a");
    let strong = dom.append_element(a, "strong");

    assert_eq!(dom.closest(strong, "a"), Some(a));
    assert_eq!(dom.closest(strong, "li"), Some(li));
    assert_eq!(dom.closest(li, "a"), None);
    assert!(dom.contains(li, strong));
    assert!(!dom.contains(strong, li));
}

#[test]
fn test_query_all_is_in_document_order() {
    let mut dom = Dom::new("div");
    let root = dom.root();
    let outer = dom.append_element(root, "a");
    let ol = dom.append_element(root, "ol");
    let inner = dom.append_element(ol, "a");
    let last = dom.append_element(root, "A");

    assert_eq!(dom.query_all("a"), vec![outer, inner, last]);
}

#[test]
fn test_attributes_and_serialisation() {
    let mut dom = Dom::new("Section");
    let a = dom.append_element(dom.root(), "a");
    dom.set_attribute(a, "href", "one.html");
    dom.set_attribute(a, "href", "two.html");
    dom.set_attribute(a, "class", "toggle  active");
    dom.append_text(a, "1 < 2");

    assert_eq!(dom.attribute(a, "href"), Some("two.html"));
    assert_eq!(dom.attribute(a, "title"), None);
    assert_eq!(
        dom.outer_html(),
        r#"<section><a class="toggle active" href="two.html">1 &lt; 2</a></section>"#
    );
    assert_eq!(dom.text_content(dom.root()), "1 < 2");
}

#[test]
fn test_clear_keeps_only_the_root() {
    let mut dom = Dom::new("div");
    let li = dom.append_element(dom.root(), "li");
    dom.append_text(li, "gone");
    dom.clear();

    assert!(dom.children(dom.root()).is_empty());
    assert_eq!(dom.inner_html(), "");
    assert_eq!(dom.outer_html(), "<div></div>");
}
