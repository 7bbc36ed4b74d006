//! Configuration to acknowledge book layout preferences as well as set defaults.
//!
//! Specifically, we try to find a tocbox.toml, and if present we load settings from there.
//! This provides the path to the book root, folding, and the headless viewport geometry.

use crate::location::DEFAULT_INDEX_DOCUMENT;
use crate::render::RenderOptions;
use facet::Facet;
use std::fs;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "tocbox.toml";

#[derive(Facet, Clone, Debug)]
/// Book preferences loaded from tocbox.toml or falling back to defaults.
pub struct Config {
    #[facet(default = String::new())]
    /// Prefix that makes book-relative links resolve from the current page.
    pub path_to_root: String,
    #[facet(default = DEFAULT_INDEX_DOCUMENT.to_string())]
    /// Document served for directory addresses.
    pub index_document: String,
    #[facet(default = false)]
    /// Render expand/collapse controls and start deep sections collapsed.
    pub fold_enable: bool,
    #[facet(default = 0)]
    /// Depth below which sections start expanded when folding.
    pub fold_level: usize,
    #[facet(default = 20)]
    /// Height of one sidebar row in the headless container.
    pub row_height: u32,
    #[facet(default = 400)]
    /// Height of the headless container's viewport.
    pub viewport_height: u32,
    #[facet(default)]
    /// JSON file persisting the sidebar scroll offset between runs.
    pub session_file: Option<String>,
}

impl Config {
    #[must_use]
    /// Load configuration from tocbox.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults when it is absent or invalid.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            match facet_toml::from_str::<Self>(&contents) {
                Ok(config) => return config,
                Err(e) => log::warn!("ignoring {}: {e}", path.display()),
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }

    #[must_use]
    /// Folding options for the renderer.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            fold_enable: self.fold_enable,
            fold_level: self.fold_level,
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
