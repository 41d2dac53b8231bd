//! Image and link passes: `![alt](url)` and `[text](url)`.
//!
//! Labels may not contain `[` or `]`, URLs may not contain `(` or `)`.
//! A link match directly preceded by `!` belongs to an image and is skipped.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::MdResult;

use super::{Fragments, InlinePass, TextFragment, map_plain};

static IMAGE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid image pattern"));

static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid link pattern"));

// =============================================================================
// Matching
// =============================================================================

/// A single `[label](url)` match within a text.
struct Found<'t> {
    start: usize,
    end: usize,
    label: &'t str,
    url: &'t str,
}

impl<'t> Found<'t> {
    fn from_captures(caps: &Captures<'t>) -> Option<Self> {
        let whole = caps.get(0)?;
        Some(Self {
            start: whole.start(),
            end: whole.end(),
            label: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
        })
    }
}

fn find_image(text: &str) -> Option<Found<'_>> {
    IMAGE_REGEX
        .captures(text)
        .and_then(|caps| Found::from_captures(&caps))
}

/// First link not preceded by `!`, searching from `from`.
fn find_link_from(text: &str, mut from: usize) -> Option<Found<'_>> {
    while let Some(caps) = LINK_REGEX.captures_at(text, from) {
        let found = Found::from_captures(&caps)?;
        if !text[..found.start].ends_with('!') {
            return Some(found);
        }
        // Retry one byte past the `[`, which is ASCII
        from = found.start + 1;
    }
    None
}

fn find_link(text: &str) -> Option<Found<'_>> {
    find_link_from(text, 0)
}

/// Extract every `(alt, url)` image pair, in order.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    IMAGE_REGEX
        .captures_iter(text)
        .filter_map(|caps| Found::from_captures(&caps))
        .map(|found| (found.label, found.url))
        .collect()
}

/// Extract every `(text, url)` link pair, in order, skipping images.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    let mut links = Vec::new();
    let mut from = 0;
    while let Some(found) = find_link_from(text, from) {
        links.push((found.label, found.url));
        from = found.end;
    }
    links
}

// =============================================================================
// Passes
// =============================================================================

/// Split plain text around the first match, repeating on the remainder.
fn split_matches<'t>(
    text: &'t str,
    find: impl Fn(&'t str) -> Option<Found<'t>>,
    make: impl Fn(&'t str, &'t str) -> TextFragment,
    output: &mut Fragments,
) {
    let mut rest = text;
    while let Some(found) = find(rest) {
        if found.start > 0 {
            output.push(TextFragment::plain(&rest[..found.start]));
        }
        output.push(make(found.label, found.url));
        rest = &rest[found.end..];
    }
    if !rest.is_empty() {
        output.push(TextFragment::plain(rest));
    }
}

/// Turn `![alt](url)` in plain fragments into image fragments.
pub fn split_images(fragments: Fragments) -> MdResult<Fragments> {
    map_plain(fragments, |text, output| {
        split_matches(text, find_image, |alt, url| TextFragment::image(alt, url), output);
        Ok(())
    })
}

/// Turn `[text](url)` in plain fragments into link fragments.
pub fn split_links(fragments: Fragments) -> MdResult<Fragments> {
    map_plain(fragments, |text, output| {
        split_matches(text, find_link, |label, url| TextFragment::link(label, url), output);
        Ok(())
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImagePass;

impl InlinePass for ImagePass {
    fn name(&self) -> &'static str {
        "image"
    }

    fn apply(&self, fragments: Fragments) -> MdResult<Fragments> {
        split_images(fragments)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkPass;

impl InlinePass for LinkPass {
    fn name(&self) -> &'static str {
        "link"
    }

    fn apply(&self, fragments: Fragments) -> MdResult<Fragments> {
        split_links(fragments)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::FragmentKind;

    #[test]
    fn test_extract_images() {
        assert_eq!(
            extract_images("This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)"),
            vec![("image", "https://i.imgur.com/zjjcJKZ.png")]
        );
        assert_eq!(
            extract_images(
                "![image1](https://i.imgur.com/first.png) and another ![image2](https://i.imgur.com/second.png)"
            ),
            vec![
                ("image1", "https://i.imgur.com/first.png"),
                ("image2", "https://i.imgur.com/second.png"),
            ]
        );
    }

    #[test]
    fn test_extract_links() {
        assert_eq!(
            extract_links(
                "This is text with a [link1](https://example.com) and another [link2](https://boot.dev)"
            ),
            vec![("link1", "https://example.com"), ("link2", "https://boot.dev")]
        );
    }

    #[test]
    fn test_extract_links_skips_images() {
        assert_eq!(
            extract_links("![img](a.png) then [site](https://example.com)"),
            vec![("site", "https://example.com")]
        );
        assert!(extract_links("![only](an-image.png)").is_empty());
    }

    #[test]
    fn test_brackets_not_allowed_in_label() {
        assert_eq!(
            extract_links("[outer [inner](x)"),
            vec![("inner", "x")]
        );
        assert!(extract_links("[text](has (paren))").is_empty());
    }

    #[test]
    fn test_split_images() {
        let fragments = vec![TextFragment::plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )];
        assert_eq!(
            split_images(fragments).unwrap(),
            vec![
                TextFragment::plain("This is text with an "),
                TextFragment::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                TextFragment::plain(" and another "),
                TextFragment::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn test_split_links() {
        let fragments = vec![TextFragment::plain(
            "Hello, check out [Boot.dev](https://www.boot.dev) for coding!",
        )];
        assert_eq!(
            split_links(fragments).unwrap(),
            vec![
                TextFragment::plain("Hello, check out "),
                TextFragment::link("Boot.dev", "https://www.boot.dev"),
                TextFragment::plain(" for coding!"),
            ]
        );
    }

    #[test]
    fn test_split_links_leaves_image_syntax() {
        let fragments = vec![TextFragment::plain("see ![alt](x.png)")];
        assert_eq!(
            split_links(fragments).unwrap(),
            vec![TextFragment::plain("see ![alt](x.png)")]
        );
    }

    #[test]
    fn test_split_adjacent_links() {
        let fragments = vec![TextFragment::plain("[a](1)[b](2)")];
        let split = split_links(fragments).unwrap();
        assert_eq!(split.len(), 2);
        assert!(split.iter().all(|f| f.kind() == FragmentKind::Link));
        assert_eq!(split[1].url(), Some("2"));
    }

    #[test]
    fn test_split_skips_typed_fragments() {
        let fragments = vec![TextFragment::code("[a](b)")];
        assert_eq!(split_links(fragments.clone()).unwrap(), fragments);
    }
}
