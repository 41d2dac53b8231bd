//! Prelude module for common imports.
//!
//! ```ignore
//! use tola_md::prelude::*;
//! ```

// Pipeline entry points
pub use crate::document::{extract_title, markdown_to_html, split_blocks, to_tree};

// Node types
pub use crate::node::{Children, Container, Leaf, Node};

// Inline
pub use crate::inline::{FragmentKind, Fragments, TextFragment, parse_inline};

// Blocks
pub use crate::block::{BlockKind, classify, expand};

// Attributes
pub use crate::attr::{Attrs, AttrsExt, render_attrs};

// Render
pub use crate::render::render_node;

// Batch
pub use crate::batch::render_batch;

// Error
pub use crate::error::{MdError, MdResult};

// Cache
#[cfg(feature = "cache")]
pub use crate::cache::{CacheEntry, CacheKey, SharedPageCache};
