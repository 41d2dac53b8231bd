//! Leaf node type
//!
//! Terminal value holders in the element tree.

use crate::attr::{Attrs, AttrsExt};

// =============================================================================
// Leaf
// =============================================================================

/// Leaf node: a tag (or none, for raw text) wrapping a value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaf {
    /// HTML tag name; `None` renders the value verbatim
    pub tag: Option<String>,
    /// Text or markup payload; required for rendering
    pub value: Option<String>,
    /// Element attributes
    pub attrs: Attrs,
}

impl Leaf {
    /// Create a tagged leaf
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    /// Create a raw text leaf
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    /// Builder: add an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Check if this is a raw text leaf
    pub fn is_raw_text(&self) -> bool {
        self.tag.is_none()
    }
}
