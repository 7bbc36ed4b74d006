use super::{load_session, save_session, ScrollState, SCROLL_KEY};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_stored_values() {
    assert_eq!(ScrollState::from_stored(Some("120")).peek(), Some(120));
    assert_eq!(ScrollState::from_stored(Some(" 42\n")).peek(), Some(42));
    assert_eq!(ScrollState::from_stored(Some("0")).peek(), Some(0));
    assert_eq!(ScrollState::from_stored(Some("")).peek(), None);
    assert_eq!(ScrollState::from_stored(Some("-5")).peek(), None);
    assert_eq!(ScrollState::from_stored(Some("top")).peek(), None);
    assert_eq!(ScrollState::from_stored(None).peek(), None);
}

#[test]
fn test_take_clears() {
    let mut state = ScrollState::empty();
    state.record(300);
    state.record(310);
    assert_eq!(state.to_stored().as_deref(), Some("310"));
    assert_eq!(state.take(), Some(310));
    assert_eq!(state.take(), None);
    assert_eq!(state.to_stored(), None);
}

#[test]
fn test_session_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    assert_eq!(load_session(&path).unwrap(), ScrollState::empty());

    save_session(&path, &ScrollState::with_offset(75)).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains(&format!("\"{SCROLL_KEY}\": \"75\"")));
    assert_eq!(load_session(&path).unwrap().peek(), Some(75));
}

#[test]
fn test_saving_empty_state_removes_only_scroll_key() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, r#"{"sidebar-scroll": "40", "theme": "navy"}"#).unwrap();

    save_session(&path, &ScrollState::empty()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(!contents.contains(SCROLL_KEY));
    assert!(contents.contains("navy"));
    assert_eq!(load_session(&path).unwrap().peek(), None);
}

#[test]
fn test_malformed_values_and_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    fs::write(&path, r#"{"sidebar-scroll": "NaN"}"#).unwrap();
    assert_eq!(load_session(&path).unwrap().peek(), None);

    fs::write(&path, r#"{"sidebar-scroll": 120}"#).unwrap();
    assert_eq!(
        load_session(&path).unwrap().peek(),
        None,
        "A numeric entry is not a stored string"
    );

    for contents in ["", "not json", "[1, 2]"] {
        fs::write(&path, contents).unwrap();
        assert_eq!(load_session(&path).unwrap(), ScrollState::empty());
    }
}

#[test]
fn test_session_with_foreign_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, r#"{"sidebar-scroll": "40", "other": 1}"#).unwrap();

    assert_eq!(load_session(&path).unwrap().peek(), Some(40));

    save_session(&path, &ScrollState::with_offset(90)).unwrap();
    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["other"], 1, "Other keys keep their values");
    assert_eq!(saved[SCROLL_KEY], "90");
}

#[test]
fn test_saving_over_unreadable_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "").unwrap();

    save_session(&path, &ScrollState::with_offset(15)).unwrap();
    assert_eq!(load_session(&path).unwrap().peek(), Some(15));
}
