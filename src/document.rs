//! Document assembly: split into blocks, classify, expand, wrap.

use crate::block::{classify, expand};
use crate::error::{MdError, MdResult};
use crate::node::{Container, Node};

/// Tag of the root container wrapping every block.
pub const ROOT_TAG: &str = "div";

/// Blank-line block separator.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Split a document into trimmed, non-empty blocks, in order.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Parse a whole document into a root `div` container.
///
/// # Errors
///
/// Fails on the first block whose inline content is malformed; no partial
/// tree is returned.
pub fn to_tree(markdown: &str) -> MdResult<Container> {
    let children = split_blocks(markdown)
        .into_iter()
        .enumerate()
        .map(|(i, block)| {
            let kind = classify(block);
            log::debug!("block {i}: {kind}");
            expand(block, kind).map(Node::from)
        })
        .collect::<MdResult<Vec<_>>>()?;

    Ok(Container::new(ROOT_TAG, children))
}

/// Parse a document and render it to HTML in one step.
pub fn markdown_to_html(markdown: &str) -> MdResult<String> {
    to_tree(markdown)?.to_html()
}

/// Find the page title: the first line starting with exactly one `#`.
///
/// # Errors
///
/// [`MdError::NoTitleFound`] when no such line has non-empty content.
pub fn extract_title(markdown: &str) -> MdResult<String> {
    markdown
        .split('\n')
        .filter(|line| line.starts_with('#') && !line.starts_with("##"))
        .map(|line| line[1..].trim())
        .find(|title| !title.is_empty())
        .map(str::to_string)
        .ok_or(MdError::NoTitleFound)
}

// =============================================================================
// Tests
// =============================================================================
