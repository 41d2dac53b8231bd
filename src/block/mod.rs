//! Block-level structure.
//!
//! A block is one blank-line-delimited chunk of a document. `classify`
//! decides its kind from line shape alone; `expand` turns it into a
//! container node.
//!
//! Classification rules, first match wins:
//!
//! | Kind | Shape |
//! |------|-------|
//! | heading | first line is 1-6 `#` then a space |
//! | code | first and last line are exactly `` ``` `` (2+ lines) |
//! | quote | every line starts with `>` |
//! | unordered list | every line starts with `- `, `* ` or `+ ` |
//! | ordered list | line `i` starts with `"{i+1}. "` |
//! | paragraph | anything else |

mod expand;

pub use expand::{
    code_to_node, expand, fragment_to_node, heading_to_node, ordered_list_to_node,
    paragraph_to_node, quote_to_node, text_to_children, unordered_list_to_node,
};

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6} ").expect("valid heading pattern"));

/// Code fence line.
pub const FENCE: &str = "```";

const LIST_MARKERS: [&str; 3] = ["- ", "* ", "+ "];

// =============================================================================
// BlockKind
// =============================================================================

/// The kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl BlockKind {
    /// All kinds, in declaration order.
    pub const ALL: [BlockKind; 6] = [
        Self::Paragraph,
        Self::Heading,
        Self::Code,
        Self::Quote,
        Self::UnorderedList,
        Self::OrderedList,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading => "heading",
            Self::Code => "code",
            Self::Quote => "quote",
            Self::UnorderedList => "unordered_list",
            Self::OrderedList => "ordered_list",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Classification
// =============================================================================

/// Classify a trimmed block by its line structure.
pub fn classify(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.lines().collect();

    let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
        return BlockKind::Paragraph;
    };

    if HEADING_REGEX.is_match(first) {
        BlockKind::Heading
    } else if lines.len() >= 2 && *first == FENCE && *last == FENCE {
        BlockKind::Code
    } else if lines.iter().all(|line| line.starts_with('>')) {
        BlockKind::Quote
    } else if lines
        .iter()
        .all(|line| LIST_MARKERS.iter().any(|marker| line.starts_with(marker)))
    {
        BlockKind::UnorderedList
    } else if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

// =============================================================================
// Tests
// =============================================================================
