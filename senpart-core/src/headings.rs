//! First-level heading extraction
//!
//! Small DOM-scan collaborator of the content grader, independent of
//! the segmentation engine. The text is read as a flat sequence of
//! element blocks; a heading's `position` is the index of its block
//! within that sequence, not a character offset.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// A first-level heading found in an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Tag name, always lowercase
    pub tag: String,
    /// Trimmed inner text of the element
    pub content: String,
    /// Index of the element among all blocks, in document order
    pub position: usize,
}

fn open_tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)<([a-z][a-z0-9]*)(?:\s[^>]*)?>").expect("static pattern")
    })
}

/// Collects every `<h1>` element of `text`, in document order.
pub fn first_level_headings(text: &str) -> Vec<Heading> {
    element_blocks(text)
        .into_iter()
        .enumerate()
        .filter(|(_, (tag, _))| tag == "h1")
        .map(|(position, (tag, content))| Heading {
            tag,
            content: content.trim().to_string(),
            position,
        })
        .collect()
}

/// Splits `text` into `(tag, inner text)` element blocks. An open tag
/// without a matching close tag is skipped rather than treated as a
/// block.
fn element_blocks(text: &str) -> Vec<(String, String)> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(found) = open_tag_pattern().find_at(text, cursor) {
        let tag = tag_name(found.as_str());
        match find_close_tag(text, &tag, found.end()) {
            Some((close_start, close_end)) => {
                blocks.push((tag, text[found.end()..close_start].to_string()));
                cursor = close_end;
            }
            None => cursor = found.end(),
        }
    }
    blocks
}

fn tag_name(open_tag: &str) -> String {
    open_tag[1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// ASCII-case-insensitive search for `</tag>` starting at `from`;
/// returns the byte range of the close tag.
fn find_close_tag(text: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let needle = format!("</{tag}>");
    let needle = needle.as_bytes();
    let haystack = text.as_bytes();
    if haystack.len() < needle.len() {
        return None;
    }
    (from..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
        .map(|i| (i, i + needle.len()))
}
