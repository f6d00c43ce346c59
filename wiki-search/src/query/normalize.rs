//! Query and document normalisation.
//!
//! All positions produced here are character indices, not byte offsets, so
//! thresholds like [`super::EARLY_MATCH_WINDOW`] count visible characters.

use crate::types::Document;

/// Lowercase `query` and split it on whitespace runs into non-empty tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// The searchable text of a document: `lowercase(title + " " + text)`.
pub fn haystack(doc: &Document) -> String {
    let mut joined = String::with_capacity(doc.title.len() + 1 + doc.text.len());
    joined.push_str(&doc.title);
    joined.push(' ');
    joined.push_str(&doc.text);
    joined.to_lowercase()
}

/// Character index of the first occurrence of `needle` in `haystack`.
///
/// Plain substring search with no word-boundary awareness.
pub fn find_char_index(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_index| haystack[..byte_index].chars().count())
}
