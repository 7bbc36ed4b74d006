//! Format trait and implementations for different chapter list sources.
//!
//! This module defines the `Format` trait which abstracts over the files a navigation tree can
//! be read from (a book's SUMMARY.md, a JSON dump of the chapter list, ...). The format is picked
//! from the file extension.

pub mod json;
pub mod summary;

use crate::error::{Error, Result};
use crate::nav::NavigationTree;
use std::fs;
use std::path::Path;

/// A source of navigation trees.
pub trait Format {
    /// File extensions handled by this format, without the dot.
    fn extensions(&self) -> &'static [&'static str];
    /// Parses a whole chapter list.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not a valid chapter list in this format.
    fn parse_tree(&self, source: &str) -> Result<NavigationTree>;
}

/// Picks the format handling `path`'s extension.
///
/// # Errors
///
/// Returns [`Error::UnknownFormat`] when no format claims the extension.
pub fn for_path(path: &Path) -> Result<Box<dyn Format>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let formats: [Box<dyn Format>; 2] =
        [Box::new(summary::SummaryFormat), Box::new(json::JsonFormat)];
    formats
        .into_iter()
        .find(|format| format.extensions().contains(&ext.as_str()))
        .ok_or_else(|| Error::UnknownFormat(path.to_path_buf()))
}

/// Reads and parses the navigation tree stored at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown extension or fails to parse.
pub fn load_tree(path: &Path) -> Result<NavigationTree> {
    let format = for_path(path)?;
    let source = fs::read_to_string(path)?;
    let tree = format.parse_tree(&source)?;
    log::debug!("loaded {} entries from {}", tree.len(), path.display());
    Ok(tree)
}

#[cfg(test)]
#[path = "tests/formats.rs"]
mod tests;
