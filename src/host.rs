//! The container the sidebar is attached to.
//!
//! The controller never looks anything up globally: it is handed a [`SidebarHost`] that owns the
//! element tree and knows how to scroll. [`Scrollbox`] is the headless host used by the CLI and
//! the terminal preview, laying visible chapter labels out as fixed-height rows.

use crate::dom::{Dom, NodeId};
use crate::render::{self, ACTIVE, EXPANDED, TOGGLE};

/// Tag of the container element.
pub const CONTAINER_TAG: &str = "mdbook-sidebar-scrollbox";

/// Injected container element with a vertical scroll position.
pub trait SidebarHost {
    /// The container's element tree; its root is the container itself.
    fn dom(&self) -> &Dom;
    /// Mutable access to the element tree.
    fn dom_mut(&mut self) -> &mut Dom;
    /// Current vertical scroll offset.
    fn scroll_top(&self) -> u32;
    /// Scrolls to `offset`; hosts may clamp it to their scrollable range.
    fn set_scroll_top(&mut self, offset: u32);
    /// Scrolls so that `node` sits in the vertical centre of the viewport.
    fn scroll_into_view_centered(&mut self, node: NodeId);
}

#[derive(Clone, Debug)]
/// One visible line of the sidebar.
pub struct Row {
    /// The link (or draft label) shown on this row.
    pub label: NodeId,
    /// The chapter item holding the label.
    pub item: NodeId,
    /// Section nesting depth, 0 for top-level chapters.
    pub depth: usize,
    /// Rendered text, section number included.
    pub text: String,
    /// Whether this is the current page.
    pub active: bool,
    /// Whether the item is expanded.
    pub expanded: bool,
    /// Expand/collapse control of the item, if it has one.
    pub toggle: Option<NodeId>,
    /// Link target, absent for drafts.
    pub href: Option<String>,
}

#[derive(Clone, Debug)]
/// Headless scroll container with fixed row and viewport heights.
pub struct Scrollbox {
    dom: Dom,
    scroll_top: u32,
    /// Height of one sidebar row.
    pub row_height: u32,
    /// Height of the visible area.
    pub viewport_height: u32,
}

impl Scrollbox {
    #[must_use]
    /// An empty container.
    pub fn new(row_height: u32, viewport_height: u32) -> Self {
        Self {
            dom: Dom::new(CONTAINER_TAG),
            scroll_top: 0,
            row_height: row_height.max(1),
            viewport_height,
        }
    }

    #[must_use]
    /// Visible rows in document order, skipping items inside collapsed sections.
    pub fn rows(&self) -> Vec<Row> {
        let dom = &self.dom;
        render::chapter_labels(dom)
            .into_iter()
            .filter(|label| render::is_revealed(dom, *label))
            .filter_map(|label| {
                let item = dom.parent(label)?;
                let depth = std::iter::successors(Some(item), |n| dom.parent(*n))
                    .filter(|n| render::section_owner(dom, *n).is_some())
                    .count();
                let toggle = dom
                    .children(item)
                    .iter()
                    .copied()
                    .find(|child| dom.is(*child, "a") && dom.has_class(*child, TOGGLE));
                Some(Row {
                    label,
                    item,
                    depth,
                    text: dom.text_content(label),
                    active: dom.has_class(label, ACTIVE),
                    expanded: dom.has_class(item, EXPANDED),
                    toggle,
                    href: dom.attribute(label, "href").map(ToString::to_string),
                })
            })
            .collect()
    }

    #[must_use]
    /// Total height of all visible rows.
    pub fn content_height(&self) -> u32 {
        u32::try_from(self.rows().len())
            .unwrap_or(u32::MAX)
            .saturating_mul(self.row_height)
    }

    #[must_use]
    /// Largest offset the container can scroll to.
    pub fn max_scroll_top(&self) -> u32 {
        self.content_height().saturating_sub(self.viewport_height)
    }

    #[must_use]
    /// Index of the visible row showing `node` (or containing it).
    pub fn row_index(&self, node: NodeId) -> Option<usize> {
        self.rows()
            .iter()
            .position(|row| self.dom.contains(row.item, node))
    }

    #[must_use]
    /// Range of row indices currently inside the viewport.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let first = self.scroll_top / self.row_height;
        let count = self.viewport_height.div_ceil(self.row_height);
        let to_usize = |n: u32| usize::try_from(n).unwrap_or(usize::MAX);
        to_usize(first)..to_usize(first.saturating_add(count))
    }

    /// Scrolls the minimum needed to bring row `index` fully into view.
    pub fn reveal_row(&mut self, index: usize) {
        let top = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.row_height);
        let bottom = top.saturating_add(self.row_height);
        if top < self.scroll_top {
            self.set_scroll_top(top);
        } else if bottom > self.scroll_top.saturating_add(self.viewport_height) {
            self.set_scroll_top(bottom.saturating_sub(self.viewport_height));
        }
    }
}

impl SidebarHost for Scrollbox {
    fn dom(&self) -> &Dom {
        &self.dom
    }

    fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, offset: u32) {
        self.scroll_top = offset.min(self.max_scroll_top());
    }

    fn scroll_into_view_centered(&mut self, node: NodeId) {
        let Some(index) = self.row_index(node) else {
            return;
        };
        let row_top = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.row_height);
        let centre = row_top.saturating_add(self.row_height / 2);
        self.set_scroll_top(centre.saturating_sub(self.viewport_height / 2));
    }
}
