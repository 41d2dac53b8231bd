//! Error types for tola-md.
//!
//! Parse errors come from malformed inline markup, render errors from a
//! structurally invalid tree. Both surface to the caller unchanged.

use thiserror::Error;

/// Errors that can occur while parsing or rendering a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MdError {
    /// A delimiter was opened but never closed (or closed without opening)
    #[error("unbalanced delimiter `{delimiter}`: no matching closing delimiter")]
    UnbalancedDelimiter {
        /// The delimiter string, e.g. `**`
        delimiter: String,
    },

    /// A leaf node was rendered without a value
    #[error("leaf node has no value")]
    MissingValue,

    /// A container node was rendered without a tag
    #[error("container node has no tag")]
    MissingTag,

    /// A container node was rendered without a children collection
    #[error("container node <{tag}> has no children")]
    MissingChildren {
        /// Tag of the offending container
        tag: String,
    },

    /// The document has no single-`#` heading line
    #[error("no title found: document has no `#` heading")]
    NoTitleFound,
}

/// Result type alias for markdown operations.
pub type MdResult<T> = Result<T, MdError>;

impl MdError {
    /// Create an unbalanced delimiter error.
    pub fn unbalanced(delimiter: impl Into<String>) -> Self {
        Self::UnbalancedDelimiter {
            delimiter: delimiter.into(),
        }
    }

    /// Whether this error comes from the input text (as opposed to a bad tree).
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::UnbalancedDelimiter { .. } | Self::NoTitleFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MdError::unbalanced("**");
        assert_eq!(
            err.to_string(),
            "unbalanced delimiter `**`: no matching closing delimiter"
        );

        let err = MdError::MissingChildren { tag: "ul".to_string() };
        assert_eq!(err.to_string(), "container node <ul> has no children");
    }

    #[test]
    fn test_input_vs_tree_errors() {
        assert!(MdError::unbalanced("`").is_input_error());
        assert!(MdError::NoTitleFound.is_input_error());
        assert!(!MdError::MissingValue.is_input_error());
        assert!(!MdError::MissingTag.is_input_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        static_assertions::assert_impl_all!(MdError: Send, Sync, Clone);
    }
}
