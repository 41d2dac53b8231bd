//! Inline span parsing.
//!
//! Turns a run of text into typed fragments. Parsing is a fixed chain of
//! passes, each taking the fragment list and returning a new one:
//!
//! | Pass | Syntax | Produces |
//! |------|--------|----------|
//! | bold | `**b**` | `Bold` |
//! | italic | `_i_` | `Italic` |
//! | code | `` `c` `` | `Code` |
//! | image | `![alt](url)` | `Image` |
//! | link | `[text](url)` | `Link` |
//!
//! Only `Plain` fragments are rewritten by a pass; every other kind passes
//! through untouched, so there is no nesting.

mod delimiter;
mod link;

pub use delimiter::{DelimiterPass, split_delimiter};
pub use link::{ImagePass, LinkPass, extract_images, extract_links, split_images, split_links};

use crate::error::MdResult;

// =============================================================================
// TextFragment
// =============================================================================

/// Kind of an inline fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl FragmentKind {
    /// Whether fragments of this kind carry a URL.
    pub const fn has_url(self) -> bool {
        matches!(self, Self::Link | Self::Image)
    }
}

/// A typed span of inline content.
///
/// For links and images `text` is the visible label and `url` the target;
/// every other kind has no URL. Equality compares kind, text and URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextFragment {
    kind: FragmentKind,
    text: String,
    url: Option<String>,
}

impl TextFragment {
    /// Create a fragment without a URL.
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(FragmentKind::Plain, text)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(FragmentKind::Bold, text)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(FragmentKind::Italic, text)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(FragmentKind::Code, text)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: FragmentKind::Link,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: FragmentKind::Image,
            text: alt.into(),
            url: Some(url.into()),
        }
    }

    #[inline]
    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[inline]
    pub fn is_plain(&self) -> bool {
        self.kind == FragmentKind::Plain
    }
}

/// Fragment list threaded through the passes.
pub type Fragments = Vec<TextFragment>;

// =============================================================================
// InlinePass
// =============================================================================

/// One step of inline parsing: rewrite plain fragments, keep the rest.
pub trait InlinePass {
    /// Name for diagnostics.
    fn name(&self) -> &'static str;

    /// Apply the pass to a fragment list, preserving order.
    fn apply(&self, fragments: Fragments) -> MdResult<Fragments>;
}

/// Passes in application order. Images must run before links, otherwise
/// the `[alt](url)` tail of an image would be read as a link.
const PASSES: [&dyn InlinePass; 5] = [
    &DelimiterPass::BOLD,
    &DelimiterPass::ITALIC,
    &DelimiterPass::CODE,
    &ImagePass,
    &LinkPass,
];

/// Parse inline markup into an ordered list of fragments.
///
/// Text without any recognized syntax yields a single plain fragment; an
/// empty string yields no fragments.
///
/// # Errors
///
/// [`MdError::UnbalancedDelimiter`](crate::MdError::UnbalancedDelimiter)
/// when a `**`, `_` or `` ` `` delimiter has no partner.
pub fn parse_inline(text: &str) -> MdResult<Fragments> {
    PASSES
        .iter()
        .try_fold(vec![TextFragment::plain(text)], |fragments, pass| {
            let fragments = pass.apply(fragments)?;
            log::trace!("inline pass {}: {} fragment(s)", pass.name(), fragments.len());
            Ok(fragments)
        })
}

/// Rewrite every plain fragment with `split`, passing other kinds through.
pub(crate) fn map_plain<F>(fragments: Fragments, mut split: F) -> MdResult<Fragments>
where
    F: FnMut(&str, &mut Fragments) -> MdResult<()>,
{
    let mut output = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if fragment.is_plain() {
            split(&fragment.text, &mut output)?;
        } else {
            output.push(fragment);
        }
    }
    Ok(output)
}

// =============================================================================
// Tests
// =============================================================================
