//! Container type - tagged nodes that own an ordered list of children
//!
//! The building block for every block-level element in the tree.

use crate::attr::{Attrs, AttrsExt};
use crate::error::MdResult;

use super::{Children, Node};

// =============================================================================
// Container
// =============================================================================

/// Tagged node with owned children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// HTML tag name; required for rendering
    pub tag: Option<String>,
    /// Child nodes; `None` is invalid, an empty list is fine
    pub children: Option<Children>,
    /// Element attributes
    pub attrs: Attrs,
}

impl Container {
    /// Create a container with the given children
    pub fn new(tag: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children.into_iter().collect()),
            attrs: Vec::new(),
        }
    }

    /// Create a container with an empty children list
    pub fn empty(tag: impl Into<String>) -> Self {
        Self::new(tag, [])
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Builder: add an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Builder: append a child node
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }

    /// Append a child node (creates the children list if absent)
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.get_or_insert_with(Children::new).push(node.into());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Child nodes as a slice (empty when absent)
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Check if the container has no children
    pub fn is_empty(&self) -> bool {
        self.children().is_empty()
    }

    /// Get text content of this subtree (concatenated leaf values)
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    /// Serialize this container (and its subtree) to markup.
    pub fn to_html(&self) -> MdResult<String> {
        crate::render::render_container(self)
    }

    fn collect_text(&self, buf: &mut String) {
        for child in self.children() {
            match child {
                Node::Leaf(leaf) => buf.push_str(leaf.value.as_deref().unwrap_or_default()),
                Node::Container(c) => c.collect_text(buf),
            }
        }
    }
}
