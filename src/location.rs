//! The current page, and how sidebar links are rewritten and resolved against it.
//!
//! A browser compares a link's fully resolved `href` with the page address. We do the same with
//! `url`: the location is normalised once, and each rewritten link is joined onto it before the
//! comparison.

use crate::error::{Error, Result};
use url::Url;

/// Directory index assumed when the location ends with `/`.
pub const DEFAULT_INDEX_DOCUMENT: &str = "index.html";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Normalised address of the page the sidebar is shown on.
pub struct CurrentPage {
    normalized: String,
    base: Url,
}

impl CurrentPage {
    /// Normalises a location: cut at the first `#`, then append `index_document` to directory
    /// addresses. Locations that are not absolute URLs are taken relative to `file:///`.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be parsed as a URL even relative to `file:///`.
    pub fn new(location: &str, index_document: &str) -> Result<Self> {
        let without_fragment = location.split('#').next().unwrap_or_default();
        let url = Url::parse(without_fragment)
            .or_else(|_| Url::parse("file:///").and_then(|root| root.join(without_fragment)))
            .map_err(|source| Error::Location {
                location: location.to_string(),
                source,
            })?;

        let mut normalized = String::from(url.as_str());
        // The URL parser may have added a root slash of its own.
        if normalized.ends_with('/') {
            normalized.push_str(index_document);
        }
        let base = Url::parse(&normalized).map_err(|source| Error::Location {
            location: location.to_string(),
            source,
        })?;
        Ok(Self { normalized, base })
    }

    /// Normalises with the default `index.html` directory index.
    ///
    /// # Errors
    ///
    /// See [`CurrentPage::new`].
    pub fn parse(location: &str) -> Result<Self> {
        Self::new(location, DEFAULT_INDEX_DOCUMENT)
    }

    #[must_use]
    /// The normalised address used for matching.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    #[must_use]
    /// Resolves a link `href` the way a browser fills in `a.href`. Empty hrefs resolve to nothing.
    pub fn resolve(&self, href: &str) -> Option<String> {
        if href.is_empty() {
            return None;
        }
        self.base.join(href).ok().map(String::from)
    }

    #[must_use]
    /// Whether this page is a directory index (`.../index.html`).
    pub fn is_index(&self) -> bool {
        self.normalized.ends_with("/index.html")
    }

    #[must_use]
    /// The page reached by following `href` from here.
    pub fn follow(&self, href: &str, index_document: &str) -> Option<Self> {
        let target = self.resolve(href)?;
        Self::new(&target, index_document).ok()
    }

    #[must_use]
    /// Address of the book root reached from this page by `path_to_root`.
    pub fn book_root(&self, path_to_root: &str) -> Option<String> {
        let relative = if path_to_root.is_empty() {
            "./"
        } else {
            path_to_root
        };
        self.base.join(relative).ok().map(String::from)
    }

    #[must_use]
    /// This page's address relative to `book_root`, or `None` when it lies outside the book.
    ///
    /// Used to find the tree entry of the current page, e.g. for previous/next chapter
    /// navigation.
    pub fn book_path(&self, book_root: &str) -> Option<String> {
        self.normalized
            .strip_prefix(book_root)
            .map(ToString::to_string)
    }
}

#[must_use]
/// The prefix leading from a page at `book_path` back to the book root, e.g. `../` for
/// `background/sumcheck.html`.
pub fn path_to_root_for(book_path: &str) -> String {
    "../".repeat(book_path.matches('/').count())
}

#[must_use]
/// Whether `href` is absolute or protocol-relative, i.e. matches `^(?:[a-z+]+:)?//`.
pub fn is_absolute(href: &str) -> bool {
    if href.starts_with("//") {
        return true;
    }
    href.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_lowercase() || c == '+')
    })
}

#[must_use]
/// Prefixes a relative link with `path_to_root`. In-page anchors, absolute links and empty
/// hrefs are returned as `None`, meaning "leave unchanged".
pub fn rewrite_href(href: &str, path_to_root: &str) -> Option<String> {
    if href.is_empty() || href.starts_with('#') || is_absolute(href) {
        None
    } else {
        Some(format!("{path_to_root}{href}"))
    }
}

#[cfg(test)]
#[path = "tests/location.rs"]
mod tests;
