use super::{is_absolute, path_to_root_for, rewrite_href, CurrentPage};

#[test]
fn test_normalisation_strips_fragment_and_adds_index() {
    let page = CurrentPage::parse("https://book.example/gkr_theory/claims.html#aggregation").unwrap();
    assert_eq!(page.normalized(), "https://book.example/gkr_theory/claims.html");

    let dir = CurrentPage::parse("https://book.example/hyrax/#top").unwrap();
    assert_eq!(dir.normalized(), "https://book.example/hyrax/index.html");
    assert!(dir.is_index());

    let custom = CurrentPage::new("https://book.example/", "home.htm").unwrap();
    assert_eq!(custom.normalized(), "https://book.example/home.htm");
    assert!(!custom.is_index());
}

#[test]
fn test_relative_locations_sit_under_file_root() {
    let page = CurrentPage::parse("frontend/gate.html").unwrap();
    assert_eq!(page.normalized(), "file:///frontend/gate.html");

    let home = CurrentPage::parse("").unwrap();
    assert_eq!(home.normalized(), "file:///index.html");
}

#[test]
fn test_absolute_link_detection() {
    assert!(is_absolute("https://example.org/x.html"));
    assert!(is_absolute("svn+ssh://host/repo"));
    assert!(is_absolute("//cdn.example/x.js"));

    assert!(!is_absolute("HTTPS://example.org/"), "Only lower-case schemes count");
    assert!(!is_absolute("mailto:someone@example.org"));
    assert!(!is_absolute("://broken"));
    assert!(!is_absolute("gkr_theory/proof.html"));
}

#[test]
fn test_rewrite_only_touches_relative_links() {
    assert_eq!(
        rewrite_href("hyrax/hyrax.html", "../"),
        Some("../hyrax/hyrax.html".to_string())
    );
    assert_eq!(
        rewrite_href("hyrax/hyrax.html", ""),
        Some("hyrax/hyrax.html".to_string())
    );
    assert_eq!(rewrite_href("#intro", "../"), None);
    assert_eq!(rewrite_href("https://example.org/", "../"), None);
    assert_eq!(rewrite_href("", "../"), None);
}

#[test]
fn test_resolution_follows_browser_rules() {
    let page = CurrentPage::parse("https://book.example/gkr_background/sumcheck.html").unwrap();

    assert_eq!(
        page.resolve("../quickstart.html").as_deref(),
        Some("https://book.example/quickstart.html")
    );
    assert_eq!(
        page.resolve("encoding_layers.html").as_deref(),
        Some("https://book.example/gkr_background/encoding_layers.html")
    );
    assert_eq!(
        page.resolve("https://example.org/a").as_deref(),
        Some("https://example.org/a")
    );
    assert_eq!(page.resolve(""), None);
}

#[test]
fn test_book_root_and_paths() {
    let page = CurrentPage::parse("https://book.example/guide/gkr_theory/proof.html").unwrap();
    let root = page.book_root("../").unwrap();
    assert_eq!(root, "https://book.example/guide/");
    assert_eq!(page.book_path(&root).as_deref(), Some("gkr_theory/proof.html"));
    assert_eq!(page.book_path("https://elsewhere.example/"), None);

    assert_eq!(path_to_root_for("quickstart.html"), "");
    assert_eq!(path_to_root_for("gkr_theory/proof.html"), "../");
    assert_eq!(path_to_root_for("a/b/c.html"), "../../");
}

#[test]
fn test_follow_normalises_target() {
    let page = CurrentPage::parse("https://book.example/hyrax/hyrax.html").unwrap();
    let next = page.follow("../frontend/#lookups", "index.html").unwrap();
    assert_eq!(next.normalized(), "https://book.example/frontend/index.html");
}
