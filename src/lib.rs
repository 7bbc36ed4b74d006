//! tocbox: table-of-contents sidebar state for static documentation books.
//!
//! A book's chapter list is rendered into an injected container as nested list markup. The
//! controller then marks the current page active, reveals its ancestors and restores the sidebar
//! scroll offset carried over from the previous page.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod formats;
pub mod host;
pub mod location;
pub mod nav;
pub mod render;
pub mod scroll;
pub mod ui;

pub use error::{Error, Result};

#[cfg(test)]
#[path = "tests/fixtures.rs"]
mod fixtures;
