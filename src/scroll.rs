//! Sidebar scroll offset carried from one page load to the next.
//!
//! A click on a sidebar link records the container's scroll offset; the next attachment takes it
//! (reading and clearing in one step) and applies it. Between processes the value is kept in a
//! small JSON session file shaped like browser session storage, with the offset as a string value.

use crate::error::Result;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Session storage key holding the decimal scroll offset.
pub const SCROLL_KEY: &str = "sidebar-scroll";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// A persisted sidebar scroll offset, or nothing.
pub struct ScrollState {
    offset: Option<u32>,
}

impl ScrollState {
    #[must_use]
    /// No offset persisted.
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    /// A state already holding `offset`.
    pub fn with_offset(offset: u32) -> Self {
        Self {
            offset: Some(offset),
        }
    }

    #[must_use]
    /// Interprets a stored decimal string. Missing or malformed values mean no offset.
    pub fn from_stored(value: Option<&str>) -> Self {
        let offset = value.and_then(|raw| match raw.trim().parse::<u32>() {
            Ok(offset) => Some(offset),
            Err(e) => {
                log::warn!("ignoring stored sidebar scroll {raw:?}: {e}");
                None
            }
        });
        Self { offset }
    }

    #[must_use]
    /// The decimal string to store, if any.
    pub fn to_stored(&self) -> Option<String> {
        self.offset.map(|offset| offset.to_string())
    }

    /// Overwrites the persisted offset.
    pub fn record(&mut self, offset: u32) {
        self.offset = Some(offset);
    }

    /// Reads and clears the persisted offset.
    pub fn take(&mut self) -> Option<u32> {
        self.offset.take()
    }

    #[must_use]
    /// The persisted offset without clearing it.
    pub fn peek(&self) -> Option<u32> {
        self.offset
    }
}

/// Loads the scroll state from a session file.
///
/// A missing, empty or unparsable file is an empty session, as is a scroll entry that is not a
/// string. Other keys are ignored.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_session(path: &Path) -> Result<ScrollState> {
    let entries = read_entries(path)?;
    let stored = match entries.get(SCROLL_KEY) {
        Some(Value::String(raw)) => Some(raw.as_str()),
        Some(other) => {
            log::warn!("ignoring non-string sidebar scroll {other} in {}", path.display());
            None
        }
        None => None,
    };
    Ok(ScrollState::from_stored(stored))
}

/// Writes the scroll state to a session file, keeping any other keys already present.
///
/// An existing file that is not a JSON object is replaced.
///
/// # Errors
///
/// Returns an error if the existing file is unreadable or the new one cannot be written.
pub fn save_session(path: &Path, state: &ScrollState) -> Result<()> {
    let mut entries = read_entries(path)?;
    match state.to_stored() {
        Some(value) => entries.insert(SCROLL_KEY.to_string(), Value::String(value)),
        None => entries.remove(SCROLL_KEY),
    };
    fs::write(path, serde_json::to_string_pretty(&entries)?)?;
    Ok(())
}

fn read_entries(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let contents = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&contents) {
        Ok(Value::Object(entries)) => Ok(entries),
        Ok(other) => {
            log::warn!("session file {} is not an object: {other}", path.display());
            Ok(Map::new())
        }
        Err(e) => {
            log::warn!("ignoring unreadable session file {}: {e}", path.display());
            Ok(Map::new())
        }
    }
}

#[cfg(test)]
#[path = "tests/scroll.rs"]
mod tests;
