//! Block → node expansion.
//!
//! Every block kind expands to one `Container`. Text content goes through
//! the inline parser, except code, which is passed through verbatim.

use crate::error::MdResult;
use crate::inline::{FragmentKind, TextFragment, parse_inline};
use crate::node::{Children, Container, Leaf, Node};

use super::BlockKind;

/// Highest heading level; extra `#` stay in the heading text.
const MAX_HEADING_LEVEL: usize = 6;

/// Expand a block of the given kind into its container node.
pub fn expand(block: &str, kind: BlockKind) -> MdResult<Container> {
    match kind {
        BlockKind::Paragraph => paragraph_to_node(block),
        BlockKind::Heading => heading_to_node(block),
        BlockKind::Code => Ok(code_to_node(block)),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => unordered_list_to_node(block),
        BlockKind::OrderedList => ordered_list_to_node(block),
    }
}

// =============================================================================
// Inline content
// =============================================================================

/// Convert one inline fragment into a leaf node.
pub fn fragment_to_node(fragment: TextFragment) -> Node {
    let url = fragment.url().unwrap_or_default().to_string();
    let leaf = match fragment.kind() {
        FragmentKind::Plain => Leaf::text(fragment.text()),
        FragmentKind::Bold => Leaf::new("b", fragment.text()),
        FragmentKind::Italic => Leaf::new("i", fragment.text()),
        FragmentKind::Code => Leaf::new("code", fragment.text()),
        FragmentKind::Link => Leaf::new("a", fragment.text()).attr("href", url),
        FragmentKind::Image => Leaf::new("img", "")
            .attr("src", url)
            .attr("alt", fragment.text()),
    };
    Node::Leaf(leaf)
}

/// Parse inline markup into child nodes.
pub fn text_to_children(text: &str) -> MdResult<Children> {
    Ok(parse_inline(text)?.into_iter().map(fragment_to_node).collect())
}

fn inline_container(tag: impl Into<String>, text: &str) -> MdResult<Container> {
    Ok(Container::new(tag, text_to_children(text)?))
}

// =============================================================================
// Per-kind expansion
// =============================================================================

/// `<p>`: newlines collapse to single spaces.
pub fn paragraph_to_node(block: &str) -> MdResult<Container> {
    inline_container("p", &block.replace('\n', " "))
}

/// `<h1>`..`<h6>`: level from leading `#` count.
pub fn heading_to_node(block: &str) -> MdResult<Container> {
    let hashes = block.chars().take_while(|&c| c == '#').count();
    let level = hashes.min(MAX_HEADING_LEVEL);
    // `#` is ASCII, so `level` is a char boundary
    let content = block[level..].trim();
    inline_container(format!("h{level}"), content)
}

/// `<pre><code>`: fence lines dropped, content kept verbatim.
pub fn code_to_node(block: &str) -> Container {
    let lines: Vec<&str> = block.split('\n').collect();
    let content = match lines.as_slice() {
        [_, inner @ .., _] => {
            let mut content = inner.join("\n");
            content.push('\n');
            content
        }
        _ => String::new(),
    };
    let code = Container::new("code", [Node::text(content)]);
    Container::new("pre", [code.into()])
}

/// `<blockquote>`: one `>` stripped per line, lines joined by spaces.
pub fn quote_to_node(block: &str) -> MdResult<Container> {
    let content = block
        .split('\n')
        .map(|line| line.strip_prefix('>').unwrap_or(line).trim())
        .collect::<Vec<_>>()
        .join(" ");
    inline_container("blockquote", &content)
}

/// `<ul>`: one `<li>` per `-`/`*`/`+` line; other lines are skipped.
pub fn unordered_list_to_node(block: &str) -> MdResult<Container> {
    let items = block
        .split('\n')
        .map(str::trim)
        .filter_map(|line| line.strip_prefix(['-', '*', '+']))
        .map(|item| inline_container("li", item.trim()).map(Node::from))
        .collect::<MdResult<Children>>()?;
    Ok(Container::new("ul", items))
}

/// `<ol>`: one `<li>` per `N. ` line; other lines are skipped.
pub fn ordered_list_to_node(block: &str) -> MdResult<Container> {
    let items = block
        .split('\n')
        .map(str::trim)
        .filter(|line| line.starts_with(|c: char| c.is_ascii_digit()))
        .filter_map(|line| line.split_once(". ").map(|(_, item)| item))
        .map(|item| inline_container("li", item.trim()).map(Node::from))
        .collect::<MdResult<Children>>()?;
    Ok(Container::new("ol", items))
}

// =============================================================================
// Tests
// =============================================================================
