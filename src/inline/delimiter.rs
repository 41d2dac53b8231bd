//! Delimiter passes: `**bold**`, `_italic_`, `` `code` ``.

use crate::error::{MdError, MdResult};

use super::{FragmentKind, Fragments, InlinePass, TextFragment, map_plain};

/// Splits plain text on a delimiter; odd segments take the pass's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterPass {
    pub delimiter: &'static str,
    pub kind: FragmentKind,
}

impl DelimiterPass {
    pub const BOLD: Self = Self::new("**", FragmentKind::Bold);
    pub const ITALIC: Self = Self::new("_", FragmentKind::Italic);
    pub const CODE: Self = Self::new("`", FragmentKind::Code);

    pub const fn new(delimiter: &'static str, kind: FragmentKind) -> Self {
        Self { delimiter, kind }
    }
}

impl InlinePass for DelimiterPass {
    fn name(&self) -> &'static str {
        self.delimiter
    }

    fn apply(&self, fragments: Fragments) -> MdResult<Fragments> {
        split_delimiter(fragments, self.delimiter, self.kind)
    }
}

/// Split every plain fragment on `delimiter`.
///
/// Segments at even positions stay plain (dropped when empty), segments at
/// odd positions become `kind` fragments (kept even when empty). A text
/// with `n` matched pairs splits into `2n + 1` segments, so an even
/// segment count means a delimiter is missing its partner.
pub fn split_delimiter(
    fragments: Fragments,
    delimiter: &str,
    kind: FragmentKind,
) -> MdResult<Fragments> {
    map_plain(fragments, |text, output| {
        let parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MdError::unbalanced(delimiter));
        }

        for (i, part) in parts.into_iter().enumerate() {
            if i % 2 == 1 {
                output.push(TextFragment::new(kind, part));
            } else if !part.is_empty() {
                output.push(TextFragment::plain(part));
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str, delimiter: &str, kind: FragmentKind) -> MdResult<Fragments> {
        split_delimiter(vec![TextFragment::plain(text)], delimiter, kind)
    }

    #[test]
    fn test_no_delimiters() {
        assert_eq!(
            split("This is just plain text", "`", FragmentKind::Code).unwrap(),
            vec![TextFragment::plain("This is just plain text")]
        );
    }

    #[test]
    fn test_single_pair() {
        assert_eq!(
            split("This is text with a `code block` word", "`", FragmentKind::Code).unwrap(),
            vec![
                TextFragment::plain("This is text with a "),
                TextFragment::code("code block"),
                TextFragment::plain(" word"),
            ]
        );
    }

    #[test]
    fn test_trailing_pair_drops_empty_plain() {
        assert_eq!(
            split("This is `code` and more `code here`", "`", FragmentKind::Code).unwrap(),
            vec![
                TextFragment::plain("This is "),
                TextFragment::code("code"),
                TextFragment::plain(" and more "),
                TextFragment::code("code here"),
            ]
        );
    }

    #[test]
    fn test_multi_char_delimiter() {
        assert_eq!(
            split("This has **bold text** in it", "**", FragmentKind::Bold).unwrap(),
            vec![
                TextFragment::plain("This has "),
                TextFragment::bold("bold text"),
                TextFragment::plain(" in it"),
            ]
        );
    }

    #[test]
    fn test_empty_delimited_segment_kept() {
        assert_eq!(
            split("a `` b", "`", FragmentKind::Code).unwrap(),
            vec![
                TextFragment::plain("a "),
                TextFragment::code(""),
                TextFragment::plain(" b"),
            ]
        );
    }

    #[test]
    fn test_pair_count_gives_odd_fragment_count() {
        let fragments = split("a _b_ c _d_ e _f_ g", "_", FragmentKind::Italic).unwrap();
        assert_eq!(fragments.len(), 7);
        for (i, fragment) in fragments.iter().enumerate() {
            let expected = if i % 2 == 0 { FragmentKind::Plain } else { FragmentKind::Italic };
            assert_eq!(fragment.kind(), expected);
        }
    }

    #[test]
    fn test_non_plain_untouched() {
        let fragments = vec![TextFragment::bold("This is `already` bold")];
        assert_eq!(
            split_delimiter(fragments.clone(), "`", FragmentKind::Code).unwrap(),
            fragments
        );
    }

    #[test]
    fn test_unmatched_delimiter() {
        assert_eq!(
            split("one `two", "`", FragmentKind::Code),
            Err(MdError::unbalanced("`"))
        );
        assert_eq!(
            split("`a` `b", "`", FragmentKind::Code),
            Err(MdError::unbalanced("`"))
        );
    }
}
