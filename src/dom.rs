//! A small element tree standing in for the sidebar's container element.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Only what the sidebar needs is
//! modelled: tags, attributes, an ordered class list, text, parent and sibling links, and
//! serialisation back to HTML.

use std::fmt::Write;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// Handle to a node in a [`Dom`].
///
/// A handle is only meaningful for the tree that produced it, and only until that tree is
/// [cleared](Dom::clear). Accessors panic on handles past the end of the arena; check
/// [`Dom::has_node`] when a handle may be stale.
pub struct NodeId(usize);

#[derive(Clone, Debug)]
enum Content {
    Element {
        tag: String,
        classes: Vec<String>,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Clone, Debug)]
struct Node {
    content: Content,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Clone, Debug)]
/// Arena of nodes under a single root element.
pub struct Dom {
    nodes: Vec<Node>,
}

impl Dom {
    #[must_use]
    /// Creates a tree holding only the root element `tag`.
    pub fn new(tag: &str) -> Self {
        let root = Node {
            content: Content::Element {
                tag: tag.to_ascii_lowercase(),
                classes: Vec::new(),
                attributes: Vec::new(),
            },
            parent: None,
            children: Vec::new(),
        };
        Self { nodes: vec![root] }
    }

    #[must_use]
    /// The container element.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    /// Whether `id` addresses a node currently in the arena.
    pub fn has_node(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn push(&mut self, parent: NodeId, content: Content) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            content,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Appends a new element as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        self.push(
            parent,
            Content::Element {
                tag: tag.to_ascii_lowercase(),
                classes: Vec::new(),
                attributes: Vec::new(),
            },
        )
    }

    /// Appends a text node as the last child of `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(parent, Content::Text(text.to_string()))
    }

    /// Drops everything below the root, like assigning an empty `innerHTML`.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0].children.clear();
    }

    #[must_use]
    /// Lower-case tag name, or `None` for text nodes.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).content {
            Content::Element { tag, .. } => Some(tag),
            Content::Text(_) => None,
        }
    }

    #[must_use]
    /// Whether `id` is an element with the given tag.
    pub fn is(&self, id: NodeId, tag: &str) -> bool {
        self.tag(id) == Some(tag)
    }

    #[must_use]
    /// Containing node, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[must_use]
    /// Child nodes in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    #[must_use]
    /// The closest preceding sibling that is an element.
    pub fn previous_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let position = siblings.iter().position(|s| *s == id)?;
        siblings[..position]
            .iter()
            .rev()
            .copied()
            .find(|s| self.tag(*s).is_some())
    }

    #[must_use]
    /// `id` itself or its nearest ancestor with the given tag.
    pub fn closest(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.is(node, tag) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    #[must_use]
    /// Whether `ancestor` contains `id` (or is `id`).
    pub fn contains(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    #[must_use]
    /// Descendants of `id` in document (pre-)order, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev());
        }
        out
    }

    #[must_use]
    /// Elements below the root with the given tag, in document order.
    pub fn query_all(&self, tag: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|id| self.is(*id, tag))
            .collect()
    }

    #[must_use]
    /// First element below the root carrying `class`.
    pub fn query_class(&self, class: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|id| self.has_class(*id, class))
    }

    #[must_use]
    /// Class list of an element, empty for text nodes.
    pub fn classes(&self, id: NodeId) -> &[String] {
        match &self.node(id).content {
            Content::Element { classes, .. } => classes,
            Content::Text(_) => &[],
        }
    }

    #[must_use]
    /// Whether the element's class list contains `class`.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    /// Adds `class` unless already present. Text nodes are left alone.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Content::Element { classes, .. } = &mut self.nodes[id.0].content {
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        }
    }

    /// Removes `class` if present.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Content::Element { classes, .. } = &mut self.nodes[id.0].content {
            classes.retain(|c| c != class);
        }
    }

    /// Flips `class` and reports whether it is now present.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            self.has_class(id, class)
        }
    }

    #[must_use]
    /// Value of an attribute, `None` when unset or on text nodes.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.node(id).content {
            Content::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            Content::Text(_) => None,
        }
    }

    /// Sets or replaces an attribute. `class` is routed to the class list.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if name == "class" {
            for class in value.split_whitespace() {
                self.add_class(id, class);
            }
            return;
        }
        if let Content::Element { attributes, .. } = &mut self.nodes[id.0].content {
            match attributes.iter_mut().find(|(key, _)| key == name) {
                Some((_, existing)) => *existing = value.to_string(),
                None => attributes.push((name.to_string(), value.to_string())),
            }
        }
    }

    #[must_use]
    /// Concatenated text of `id` and its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        std::iter::once(id)
            .chain(self.descendants(id))
            .filter_map(|node| match &self.node(node).content {
                Content::Text(text) => Some(text.as_str()),
                Content::Element { .. } => None,
            })
            .collect()
    }

    #[must_use]
    /// Serialises the children of the root, the equivalent of reading `innerHTML`.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in self.children(self.root()) {
            self.write_html(*child, &mut out);
        }
        out
    }

    #[must_use]
    /// Serialises the root element itself.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        self.write_html(self.root(), &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        match &self.node(id).content {
            Content::Text(text) => out.push_str(&escape(text)),
            Content::Element {
                tag,
                classes,
                attributes,
            } => {
                out.push('<');
                out.push_str(tag);
                if !classes.is_empty() {
                    let _ = write!(out, " class=\"{}\"", escape(&classes.join(" ")));
                }
                for (key, value) in attributes {
                    let _ = write!(out, " {key}=\"{}\"", escape(value));
                }
                out.push('>');
                for child in &self.node(id).children {
                    self.write_html(*child, out);
                }
                let _ = write!(out, "</{tag}>");
            }
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/dom.rs"]
mod tests;
