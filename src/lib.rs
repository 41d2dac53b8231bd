//! tola-md - Markdown to HTML element trees
//!
//! ## Pipeline
//!
//! ```text
//! document text ──split──▶ blocks ──classify/expand──▶ Container tree ──render──▶ HTML
//!                                        │
//!                                        └── inline text ──parse_inline──▶ fragments ──▶ leaves
//! ```
//!
//! Each document is parsed on its own with no shared state, so documents
//! can be processed concurrently without coordination.
//!
//! ## Modules
//! - `node`: `Node` sum type (`Leaf` / `Container`)
//! - `render`: HTML serialization of a tree
//! - `inline`: inline span parsing (`**bold**`, `_italic_`, `` `code` ``, links, images)
//! - `block`: block classification and expansion
//! - `document`: document assembly and title extraction
//! - `cache`: content-hash keyed page cache (feature `cache`)
//! - `batch`: multi-document rendering (parallel with feature `parallel`)
//!
//! ## Usage
//!
//! ```ignore
//! use tola_md::{extract_title, to_tree};
//!
//! let markdown = "# Hello\n\nSome **bold** text";
//! let title = extract_title(markdown)?;
//! let html = to_tree(markdown)?.to_html()?;
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>");
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Core modules
// =============================================================================

/// Node types: Node, Leaf, Container
pub mod node;

/// HTML rendering
pub mod render;

/// Inline span parsing
pub mod inline;

/// Block classification and expansion
pub mod block;

/// Document assembly
pub mod document;

/// Attribute types
pub mod attr;

/// Multi-document rendering
pub mod batch;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

/// Deterministic source hashing
#[cfg(feature = "cache")]
pub mod hash;

/// Page cache for incremental rebuilds
#[cfg(feature = "cache")]
pub mod cache;

// =============================================================================
// Re-exports
// =============================================================================

// Entry points
pub use document::{extract_title, markdown_to_html, split_blocks, to_tree};

// Node types
pub use node::{Children, Container, Leaf, Node};

// Inline
pub use inline::{FragmentKind, TextFragment, parse_inline};

// Blocks
pub use block::{BlockKind, classify};

// Attribute types
pub use attr::{Attrs, AttrsExt};

// Render
pub use render::render_node;

// Batch
pub use batch::render_batch;

// Error types
pub use error::{MdError, MdResult};

// Cache types
#[cfg(feature = "cache")]
pub use cache::{CacheEntry, CacheKey, SharedPageCache};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_pipeline() {
        let markdown = "# Hello\n\nSome **bold** text";
        assert_eq!(extract_title(markdown).unwrap(), "Hello");
        assert_eq!(
            to_tree(markdown).unwrap().to_html().unwrap(),
            "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>"
        );
    }

    #[test]
    fn test_concurrent_documents() {
        let handles: Vec<_> = (0..8)
            .map(|i| std::thread::spawn(move || markdown_to_html(&format!("Page _{i}_"))))
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let html = handle.join().unwrap().unwrap();
            assert_eq!(html, format!("<div><p>Page <i>{i}</i></p></div>"));
        }
    }
}
