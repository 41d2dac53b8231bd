//! Node types for the element tree.
//!
//! A tree is built from two node kinds:
//!
//! - `Leaf`: optional tag plus a value payload (no tag = raw text)
//! - `Container`: tag plus an ordered list of owned children
//!
//! Required parts are stored as `Option` so a structurally invalid node can
//! still be built; validity is checked when the tree is rendered.

mod container;
mod leaf;

pub use container::Container;
pub use leaf::Leaf;

use smallvec::SmallVec;

use crate::error::MdResult;

/// Node in an element tree - either Leaf or Container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(Leaf),
    Container(Box<Container>),
}

impl Node {
    // Generates for each variant (leaf -> Leaf, container -> Container):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&Type>
    //   - as_xxx_mut(&mut self) -> Option<&mut Type>
    impl_enum_accessors!(leaf, container);

    /// Raw text leaf (no tag).
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf(Leaf::text(value))
    }

    /// Tagged leaf with a value.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Leaf(Leaf::new(tag, value))
    }

    /// Container with the given children.
    pub fn container(tag: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Self {
        Node::Container(Box::new(Container::new(tag, children)))
    }

    /// Tag name, if the node has one.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag.as_deref(),
            Node::Container(container) => container.tag.as_deref(),
        }
    }

    /// Serialize this node (and its subtree) to markup.
    pub fn to_html(&self) -> MdResult<String> {
        crate::render::render_node(self)
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Container> for Node {
    fn from(container: Container) -> Self {
        Node::Container(Box::new(container))
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 8]>;
