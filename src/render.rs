//! HTML Rendering for element trees
//!
//! Renders a `Node` (typically the root `div`) to a markup string. Values
//! and attribute values are emitted verbatim: the tree is trusted to hold
//! markup-ready text.

use crate::attr::push_attrs;
use crate::error::{MdError, MdResult};
use crate::node::{Container, Leaf, Node};

// =============================================================================
// Node Rendering
// =============================================================================

/// Render a node and its subtree to an HTML string.
///
/// # Errors
///
/// - [`MdError::MissingValue`] for a leaf without a value
/// - [`MdError::MissingTag`] for a container without a tag
/// - [`MdError::MissingChildren`] for a container without a children list
pub fn render_node(node: &Node) -> MdResult<String> {
    let mut output = String::new();
    write_node(node, &mut output)?;
    Ok(output)
}

/// Render a container and its subtree to an HTML string.
pub fn render_container(container: &Container) -> MdResult<String> {
    let mut output = String::new();
    write_container(container, &mut output)?;
    Ok(output)
}

/// Render a node into an existing buffer.
fn write_node(node: &Node, output: &mut String) -> MdResult<()> {
    match node {
        Node::Leaf(leaf) => write_leaf(leaf, output),
        Node::Container(container) => write_container(container, output),
    }
}

/// Render a leaf node.
fn write_leaf(leaf: &Leaf, output: &mut String) -> MdResult<()> {
    let value = leaf.value.as_deref().ok_or(MdError::MissingValue)?;

    let Some(tag) = leaf.tag.as_deref() else {
        // Raw text: output as-is
        output.push_str(value);
        return Ok(());
    };

    output.push('<');
    output.push_str(tag);
    push_attrs(&leaf.attrs, output);
    output.push('>');
    output.push_str(value);
    push_close(tag, output);
    Ok(())
}

/// Render a container node and its children.
fn write_container(container: &Container, output: &mut String) -> MdResult<()> {
    let tag = container.tag.as_deref().ok_or(MdError::MissingTag)?;
    let children = container
        .children
        .as_ref()
        .ok_or_else(|| MdError::MissingChildren { tag: tag.to_string() })?;

    output.push('<');
    output.push_str(tag);
    push_attrs(&container.attrs, output);
    output.push('>');

    for child in children {
        write_node(child, output)?;
    }

    push_close(tag, output);
    Ok(())
}

fn push_close(tag: &str, output: &mut String) {
    output.push_str("</");
    output.push_str(tag);
    output.push('>');
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_leaf() {
        let node = Node::leaf("p", "Hello world");
        assert_eq!(render_node(&node).unwrap(), "<p>Hello world</p>");
    }

    #[test]
    fn test_render_raw_text_leaf() {
        let node = Node::text("a < b & c");
        assert_eq!(render_node(&node).unwrap(), "a < b & c");
    }

    #[test]
    fn test_render_leaf_with_attrs() {
        let node: Node = Leaf::new("a", "Click me!")
            .attr("href", "https://example.com")
            .into();
        assert_eq!(
            render_node(&node).unwrap(),
            r#"<a href="https://example.com">Click me!</a>"#
        );
    }

    #[test]
    fn test_render_leaf_empty_value_is_valid() {
        let node: Node = Leaf::new("img", "")
            .attr("src", "cat.png")
            .attr("alt", "A cat")
            .into();
        assert_eq!(
            render_node(&node).unwrap(),
            r#"<img src="cat.png" alt="A cat"></img>"#
        );
    }

    #[test]
    fn test_render_leaf_missing_value() {
        let node = Node::Leaf(Leaf {
            tag: Some("p".to_string()),
            ..Leaf::default()
        });
        assert_eq!(render_node(&node), Err(MdError::MissingValue));
    }

    #[test]
    fn test_render_grandchildren() {
        let node = Node::container("div", [Node::container("span", [Node::leaf("b", "grandchild")])]);
        assert_eq!(
            render_node(&node).unwrap(),
            "<div><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn test_render_container_attrs() {
        let node: Node = Container::new("div", [Node::leaf("span", "child")])
            .attr("class", "wrapper")
            .into();
        assert_eq!(
            render_node(&node).unwrap(),
            r#"<div class="wrapper"><span>child</span></div>"#
        );
    }

    #[test]
    fn test_render_empty_children() {
        let node = Node::container("div", []);
        assert_eq!(render_node(&node).unwrap(), "<div></div>");
    }

    #[test]
    fn test_render_missing_tag() {
        let mut container = Container::new("div", [Node::leaf("span", "child")]);
        container.tag = None;
        assert_eq!(render_node(&container.into()), Err(MdError::MissingTag));
    }

    #[test]
    fn test_render_missing_children() {
        let mut container = Container::empty("div");
        container.children = None;
        assert_eq!(
            render_node(&container.into()),
            Err(MdError::MissingChildren { tag: "div".to_string() })
        );
    }

    #[test]
    fn test_render_error_in_nested_child() {
        let broken = Node::Leaf(Leaf::default());
        let node = Node::container("ul", [Node::container("li", [broken])]);
        assert_eq!(node.to_html(), Err(MdError::MissingValue));
    }
}
