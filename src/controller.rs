//! The sidebar controller: render, mark the current page, restore scroll, listen.
//!
//! A controller has two states and moves between them exactly once:
//!
//! ```text
//! SidebarController --attach()--> AttachedSidebar
//!    (unattached)                    (attached, no teardown)
//! ```
//!
//! Attaching consumes the controller, so the type system rules out a second attachment. What
//! the browser keeps in ambient globals is passed explicitly here: the root-relative prefix at
//! construction, and the container, current page and scroll state at attachment.
//!
//! # Matching
//!
//! Links are visited in document order. A relative link is first prefixed with the path to the
//! book root, then resolved against the current page. It matches when the result equals the
//! normalised page address. The very first link also matches any `.../index.html` page when the
//! prefix is empty, because a book's index page stands in for its first chapter.
//!
//! # Scroll restoration
//!
//! Exactly one of two things happens on attach. A persisted offset is taken and applied
//! (the reader clicked a sidebar link on the previous page), or, with nothing persisted, the
//! active link is centred (the reader arrived some other way, e.g. next/previous buttons).

use crate::dom::NodeId;
use crate::host::SidebarHost;
use crate::location::{self, CurrentPage};
use crate::render::{self, RenderOptions, Renderable, ACTIVE, CHAPTER_ITEM, EXPANDED, TOGGLE};
use crate::scroll::ScrollState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which scroll behaviour fired during attachment.
pub enum ScrollRestore {
    /// A persisted offset was taken and applied.
    Restored(u32),
    /// Nothing was persisted; the active link was centred.
    Centered(NodeId),
    /// Nothing was persisted and no link is active.
    Unchanged,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Result of a click delivered to the delegated listener.
pub struct Click {
    /// Scroll offset recorded before navigating.
    pub recorded: u32,
    /// Link target to navigate to, absent for controls without one.
    pub href: Option<String>,
}

/// Unattached sidebar: a tree to render and the prefix its links need.
pub struct SidebarController<T: Renderable> {
    tree: T,
    path_to_root: String,
    options: RenderOptions,
}

impl<T: Renderable> SidebarController<T> {
    #[must_use]
    /// Prepares a controller for `tree` whose relative links need `path_to_root`.
    pub fn new(tree: T, path_to_root: impl Into<String>) -> Self {
        Self {
            tree,
            path_to_root: path_to_root.into(),
            options: RenderOptions::default(),
        }
    }

    #[must_use]
    /// Sets the folding behaviour of the rendered list.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    /// The root-relative prefix applied to relative links.
    pub fn path_to_root(&self) -> &str {
        &self.path_to_root
    }

    /// Renders into `host`, marks the current page, restores scroll and wires the listeners.
    ///
    /// The scroll state is read and cleared here; it is only written again by
    /// [`AttachedSidebar::click`].
    pub fn attach<H: SidebarHost>(
        self,
        host: &mut H,
        page: &CurrentPage,
        scroll: &mut ScrollState,
    ) -> AttachedSidebar {
        let dom = host.dom_mut();
        dom.clear();
        let container = dom.root();
        self.tree.render_into(dom, container, self.options);

        let active = self.mark_current_page(host, page);

        let restore = match scroll.take() {
            Some(offset) => {
                host.set_scroll_top(offset);
                log::debug!("restored sidebar scroll to {offset}");
                ScrollRestore::Restored(offset)
            }
            None => match host.dom().query_class(ACTIVE) {
                Some(node) => {
                    host.scroll_into_view_centered(node);
                    log::debug!("centred active link, scroll now {}", host.scroll_top());
                    ScrollRestore::Centered(node)
                }
                None => ScrollRestore::Unchanged,
            },
        };

        let toggles: Vec<NodeId> = host
            .dom()
            .query_all("a")
            .into_iter()
            .filter(|link| host.dom().has_class(*link, TOGGLE))
            .collect();

        AttachedSidebar {
            path_to_root: self.path_to_root,
            active,
            restore,
            toggles,
        }
    }

    fn mark_current_page<H: SidebarHost>(
        &self,
        host: &mut H,
        page: &CurrentPage,
    ) -> Option<NodeId> {
        let dom = host.dom_mut();
        let mut active = None;

        for (i, link) in dom.query_all("a").into_iter().enumerate() {
            let rewritten = dom
                .attribute(link, "href")
                .and_then(|href| location::rewrite_href(href, &self.path_to_root));
            if let Some(rewritten) = rewritten {
                dom.set_attribute(link, "href", &rewritten);
            }
            if active.is_some() {
                continue;
            }

            let resolved = dom.attribute(link, "href").and_then(|href| page.resolve(href));
            let is_home_alias = i == 0 && self.path_to_root.is_empty() && page.is_index();
            if resolved.as_deref() == Some(page.normalized()) || is_home_alias {
                log::debug!("active sidebar link: {resolved:?}");
                dom.add_class(link, ACTIVE);
                let item = dom.parent(link).filter(|p| dom.has_class(*p, CHAPTER_ITEM));
                if let Some(item) = item {
                    dom.add_class(item, EXPANDED);
                }
                let mut ancestor = dom.parent(link);
                while let Some(node) = ancestor {
                    if let Some(owner) = render::section_owner(dom, node) {
                        dom.add_class(owner, EXPANDED);
                    }
                    ancestor = dom.parent(node);
                }
                active = Some(link);
            }
        }

        if active.is_none() {
            log::debug!("no sidebar link matches {}", page.normalized());
        }
        active
    }
}

#[derive(Clone, Debug)]
/// A sidebar attached to its container, with its listeners live.
pub struct AttachedSidebar {
    path_to_root: String,
    active: Option<NodeId>,
    restore: ScrollRestore,
    toggles: Vec<NodeId>,
}

impl AttachedSidebar {
    #[must_use]
    /// The link marked as the current page, if any.
    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    #[must_use]
    /// What happened to the scroll position during attachment.
    pub fn restore(&self) -> ScrollRestore {
        self.restore
    }

    #[must_use]
    /// Expand/collapse controls that have a toggle listener.
    pub fn toggles(&self) -> &[NodeId] {
        &self.toggles
    }

    #[must_use]
    /// The root-relative prefix the links were rewritten with.
    pub fn path_to_root(&self) -> &str {
        &self.path_to_root
    }

    /// Delegated click listener for the whole container.
    ///
    /// A click landing on (or inside) a link records the container's scroll offset so the next
    /// attachment can restore it. Clicks elsewhere are ignored.
    pub fn click<H: SidebarHost>(
        &self,
        host: &H,
        target: NodeId,
        scroll: &mut ScrollState,
    ) -> Option<Click> {
        let dom = host.dom();
        if !dom.has_node(target) {
            return None;
        }
        let link = dom.closest(target, "a")?;
        let recorded = host.scroll_top();
        scroll.record(recorded);
        Some(Click {
            recorded,
            href: dom.attribute(link, "href").map(ToString::to_string),
        })
    }

    /// Toggle listener: flips `expanded` on the control's list item.
    ///
    /// Returns the new expanded state, or `None` if `control` has no toggle listener.
    pub fn toggle<H: SidebarHost>(&self, host: &mut H, control: NodeId) -> Option<bool> {
        let dom = host.dom();
        if !dom.has_node(control) {
            return None;
        }
        let control = self
            .toggles
            .iter()
            .copied()
            .filter(|t| dom.has_node(*t))
            .find(|t| dom.contains(*t, control))?;
        let item = host.dom().parent(control)?;
        Some(host.dom_mut().toggle_class(item, EXPANDED))
    }
}

#[cfg(test)]
#[path = "tests/controller.rs"]
mod tests;
