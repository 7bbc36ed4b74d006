//! Navigation tree representation for a book's chapter list.
//!
//! The tree is an ordered forest fixed at build time. Each node carries the label shown in the
//! sidebar and the page it links to, relative to the book root. Section numbers are not stored:
//! they are derived from position so that affix chapters never disturb the numbering.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One chapter or section entry in the sidebar.
pub struct NavigationNode {
    /// Text shown for the entry.
    pub label: String,
    /// Page link relative to the book root; empty for a draft chapter with no page.
    #[serde(default)]
    pub href: String,
    /// Whether the entry takes part in section numbering.
    #[serde(default = "default_numbered")]
    pub numbered: bool,
    /// Nested entries, in reading order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationNode>,
}

fn default_numbered() -> bool {
    true
}

impl NavigationNode {
    #[must_use]
    /// A numbered chapter linking to `href`.
    pub fn chapter(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            numbered: true,
            children: Vec::new(),
        }
    }

    #[must_use]
    /// An unnumbered chapter placed before or after the numbered ones.
    pub fn affix(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            numbered: false,
            ..Self::chapter(label, href)
        }
    }

    #[must_use]
    /// Replaces the nested entries.
    pub fn with_children(mut self, children: Vec<NavigationNode>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    /// Drafts have a label but no page to link to.
    pub fn is_draft(&self) -> bool {
        self.href.is_empty()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Static ordered forest of navigation nodes.
pub struct NavigationTree {
    /// Top-level entries in reading order.
    pub chapters: Vec<NavigationNode>,
}

/// A node seen during a depth-first walk, with its derived position.
#[derive(Clone, Debug)]
pub struct FlatEntry<'a> {
    /// The visited node.
    pub node: &'a NavigationNode,
    /// Nesting depth, 0 for top-level chapters.
    pub depth: usize,
    /// Section number such as `2.1.`, absent for affix chapters.
    pub number: Option<String>,
}

/// Builds the section number of the `ordinal`-th (1-based) numbered child under `parent`.
#[must_use]
pub fn section_number(parent: Option<&str>, ordinal: usize) -> String {
    format!("{}{ordinal}.", parent.unwrap_or_default())
}

impl NavigationTree {
    #[must_use]
    /// Wraps the given top-level chapters.
    pub fn new(chapters: Vec<NavigationNode>) -> Self {
        Self { chapters }
    }

    #[must_use]
    /// Whether the book has no chapters at all.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    #[must_use]
    /// Every node in reading (render) order with its depth and section number.
    pub fn flatten(&self) -> Vec<FlatEntry<'_>> {
        let mut out = Vec::new();
        flatten_into(&self.chapters, None, 0, &mut out);
        out
    }

    #[must_use]
    /// Number of entries including nested ones.
    pub fn len(&self) -> usize {
        self.flatten().len()
    }

    #[must_use]
    /// The pages before and after `href` in reading order, skipping drafts.
    ///
    /// This is what a book's "previous chapter" and "next chapter" buttons link to.
    pub fn neighbours(&self, href: &str) -> (Option<&str>, Option<&str>) {
        let pages: Vec<&str> = self
            .flatten()
            .into_iter()
            .filter(|entry| !entry.node.is_draft())
            .map(|entry| entry.node.href.as_str())
            .collect();

        match pages.iter().position(|page| *page == href) {
            Some(i) => (
                i.checked_sub(1).map(|prev| pages[prev]),
                pages.get(i + 1).copied(),
            ),
            None => (None, None),
        }
    }
}

fn flatten_into<'a>(
    nodes: &'a [NavigationNode],
    parent_number: Option<&str>,
    depth: usize,
    out: &mut Vec<FlatEntry<'a>>,
) {
    let mut ordinal = 0;
    for node in nodes {
        let number = if node.numbered {
            ordinal += 1;
            Some(section_number(parent_number, ordinal))
        } else {
            None
        };
        out.push(FlatEntry {
            node,
            depth,
            number: number.clone(),
        });
        flatten_into(&node.children, number.as_deref(), depth + 1, out);
    }
}

#[cfg(test)]
#[path = "tests/nav.rs"]
mod tests;
