use super::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_defaults_when_file_missing() {
    let dir = tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("tocbox.toml"));

    assert_eq!(cfg.path_to_root, "");
    assert_eq!(cfg.index_document, "index.html");
    assert!(!cfg.fold_enable);
    assert_eq!(cfg.fold_level, 0);
    assert_eq!(cfg.row_height, 20);
    assert_eq!(cfg.viewport_height, 400);
    assert_eq!(cfg.session_file, None);
}

#[test]
fn test_values_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tocbox.toml");
    fs::write(
        &path,
        "path_to_root = \"../\"\nfold_enable = true\nfold_level = 2\nsession_file = \"session.json\"\n",
    )
    .unwrap();

    let cfg = Config::load_from(&path);
    assert_eq!(cfg.path_to_root, "../");
    assert_eq!(cfg.session_file.as_deref(), Some("session.json"));
    assert_eq!(cfg.viewport_height, 400, "Unset keys keep their defaults");

    let options = cfg.render_options();
    assert!(options.fold_enable);
    assert_eq!(options.fold_level, 2);
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tocbox.toml");
    fs::write(&path, "fold_level = \"deep\"").unwrap();

    let cfg = Config::load_from(&path);
    assert_eq!(cfg.fold_level, 0);
}
