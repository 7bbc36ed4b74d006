//! Errors raised while loading books, sessions and locations.
//!
//! The sidebar itself degrades silently; only the I/O around it can fail.

use std::io;
use std::path::PathBuf;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
/// Failure while reading inputs or writing session state.
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A JSON tree or session file could not be (de)serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The tree-sitter grammar could not be loaded.
    #[error("tree-sitter language error: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// No format handles files with this extension.
    #[error("unsupported navigation tree format: {}", .0.display())]
    UnknownFormat(PathBuf),
    /// A chapter list entry could not be understood.
    #[error("malformed summary at line {line}: {message}")]
    Summary {
        /// One-based line of the offending entry.
        line: usize,
        /// What was wrong with it.
        message: String,
    },
    /// The current page location is not a usable URL.
    #[error("invalid location {location:?}: {source}")]
    Location {
        /// Location as supplied.
        location: String,
        /// Parser failure.
        source: url::ParseError,
    },
}
