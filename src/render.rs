//! Rendering a navigation tree into sidebar list markup.
//!
//! The markup mirrors what book stylesheets expect:
//!
//! ```text
//! <ol class="chapter">
//!   <li class="chapter-item expanded"><a href="intro.html"><strong aria-hidden="true">1.</strong> Intro</a></li>
//!   <li class="chapter-item expanded"><a href="a/a.html"><strong aria-hidden="true">2.</strong> A</a></li>
//!   <li><ol class="section">
//!     <li class="chapter-item expanded"><a href="a/b.html"><strong aria-hidden="true">2.1.</strong> B</a></li>
//!   </ol></li>
//! </ol>
//! ```
//!
//! A node's children sit in a wrapper `<li>` that directly follows the node's own item, which is
//! what lets an expanded item reveal the section after it.

use crate::dom::{Dom, NodeId};
use crate::nav::{section_number, NavigationNode, NavigationTree};

/// Class of each list item holding a link.
pub const CHAPTER_ITEM: &str = "chapter-item";
/// Class marking a visibly open item.
pub const EXPANDED: &str = "expanded";
/// Class marking the current page's link.
pub const ACTIVE: &str = "active";
/// Class of the expand/collapse controls.
pub const TOGGLE: &str = "toggle";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Folding behaviour of the rendered list.
pub struct RenderOptions {
    /// Render toggle controls and start deep sections collapsed.
    pub fold_enable: bool,
    /// Items with children shallower than this depth start expanded when folding.
    pub fold_level: usize,
}

impl RenderOptions {
    fn starts_expanded(self, has_children: bool, depth: usize) -> bool {
        !self.fold_enable || (has_children && depth < self.fold_level)
    }
}

/// Anything that can draw itself as sidebar markup under a container node.
pub trait Renderable {
    /// Appends the sidebar markup as children of `container`.
    fn render_into(&self, dom: &mut Dom, container: NodeId, options: RenderOptions);
}

impl Renderable for NavigationTree {
    fn render_into(&self, dom: &mut Dom, container: NodeId, options: RenderOptions) {
        let list = dom.append_element(container, "ol");
        dom.add_class(list, "chapter");
        render_level(dom, list, &self.chapters, None, 0, options);
    }
}

fn render_level(
    dom: &mut Dom,
    list: NodeId,
    nodes: &[NavigationNode],
    parent_number: Option<&str>,
    depth: usize,
    options: RenderOptions,
) {
    let mut ordinal = 0;
    for node in nodes {
        let number = node.numbered.then(|| {
            ordinal += 1;
            section_number(parent_number, ordinal)
        });

        let item = dom.append_element(list, "li");
        dom.add_class(item, CHAPTER_ITEM);
        if options.starts_expanded(!node.children.is_empty(), depth) {
            dom.add_class(item, EXPANDED);
        }

        let label = if node.is_draft() {
            dom.append_element(item, "div")
        } else {
            let link = dom.append_element(item, "a");
            dom.set_attribute(link, "href", &node.href);
            link
        };
        if let Some(number) = &number {
            let strong = dom.append_element(label, "strong");
            dom.set_attribute(strong, "aria-hidden", "true");
            dom.append_text(strong, number);
            dom.append_text(label, " ");
        }
        dom.append_text(label, &node.label);

        if options.fold_enable && !node.children.is_empty() {
            let toggle = dom.append_element(item, "a");
            dom.add_class(toggle, TOGGLE);
            let glyph = dom.append_element(toggle, "div");
            dom.append_text(glyph, "❱");
        }

        if !node.children.is_empty() {
            let wrapper = dom.append_element(list, "li");
            let section = dom.append_element(wrapper, "ol");
            dom.add_class(section, "section");
            render_level(
                dom,
                section,
                &node.children,
                number.as_deref(),
                depth + 1,
                options,
            );
        }
    }
}

#[must_use]
/// Whether `node` is a section wrapper: a class-less `<li>` directly after a chapter item.
pub fn is_section_wrapper(dom: &Dom, node: NodeId) -> bool {
    dom.is(node, "li") && !dom.has_class(node, CHAPTER_ITEM)
}

#[must_use]
/// The chapter item that owns the section wrapped by `wrapper`, if any.
pub fn section_owner(dom: &Dom, wrapper: NodeId) -> Option<NodeId> {
    if !is_section_wrapper(dom, wrapper) {
        return None;
    }
    dom.previous_element_sibling(wrapper)
        .filter(|prev| dom.has_class(*prev, CHAPTER_ITEM))
}

#[must_use]
/// Whether every section above `node` belongs to an expanded chapter item.
pub fn is_revealed(dom: &Dom, node: NodeId) -> bool {
    let mut current = dom.parent(node);
    while let Some(ancestor) = current {
        if let Some(owner) = section_owner(dom, ancestor) {
            if !dom.has_class(owner, EXPANDED) {
                return false;
            }
        }
        current = dom.parent(ancestor);
    }
    true
}

#[must_use]
/// Links to pages, in document order, leaving out toggle controls.
pub fn chapter_links(dom: &Dom) -> Vec<NodeId> {
    dom.query_all("a")
        .into_iter()
        .filter(|link| !dom.has_class(*link, TOGGLE))
        .collect()
}

#[must_use]
/// The label element (link or draft `<div>`) of every chapter item, in document order.
pub fn chapter_labels(dom: &Dom) -> Vec<NodeId> {
    dom.query_all("li")
        .into_iter()
        .filter(|item| dom.has_class(*item, CHAPTER_ITEM))
        .filter_map(|item| {
            dom.children(item).iter().copied().find(|child| {
                dom.is(*child, "div") || (dom.is(*child, "a") && !dom.has_class(*child, TOGGLE))
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
