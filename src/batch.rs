//! Batch rendering of many documents.
//!
//! Documents share no state, so each one is parsed independently. With
//! the `parallel` feature the work is spread over rayon's thread pool;
//! otherwise it runs sequentially. Results keep input order either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::document::markdown_to_html;
use crate::error::MdResult;

/// Render every source to HTML, one result per input, in input order.
///
/// A failing document does not affect the others.
#[cfg(feature = "parallel")]
pub fn render_batch<S>(sources: &[S]) -> Vec<MdResult<String>>
where
    S: AsRef<str> + Sync,
{
    sources
        .par_iter()
        .map(|source| markdown_to_html(source.as_ref()))
        .collect()
}

/// Render every source to HTML, one result per input, in input order.
///
/// A failing document does not affect the others.
#[cfg(not(feature = "parallel"))]
pub fn render_batch<S>(sources: &[S]) -> Vec<MdResult<String>>
where
    S: AsRef<str> + Sync,
{
    sources
        .iter()
        .map(|source| markdown_to_html(source.as_ref()))
        .collect()
}
