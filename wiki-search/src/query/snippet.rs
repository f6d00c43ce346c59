//! Snippet extraction and length clamping.

use super::{ELLIPSIS, SNIPPET_LEAD, SNIPPET_MAX_CHARS, SNIPPET_WINDOW};

/// Build a result snippet from a document body.
///
/// `anchor` is the haystack position of the first query token. The window
/// starts [`SNIPPET_LEAD`] characters before it (never below 0) and spans
/// up to [`SNIPPET_WINDOW`] raw characters of `text`. The excerpt is then
/// whitespace-collapsed and clamped to [`SNIPPET_MAX_CHARS`].
///
/// The anchor is measured in the haystack (title, space, body) but applied
/// to the body alone, so the window starts ahead of the match by the title's
/// length plus one.
pub fn make_snippet(text: &str, anchor: usize) -> String {
    let start = anchor.saturating_sub(SNIPPET_LEAD);
    let window: String = text.chars().skip(start).take(SNIPPET_WINDOW).collect();
    clamp(&collapse_whitespace(&window), SNIPPET_MAX_CHARS)
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate `text` to at most `max` characters.
///
/// Text within the limit is returned unchanged. Longer text keeps its first
/// `max - 3` characters, drops trailing whitespace, and gains [`ELLIPSIS`].
pub fn clamp(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }

    let ellipsis_len = ELLIPSIS.chars().count();
    if max < ellipsis_len {
        return ELLIPSIS.chars().take(max).collect();
    }

    let head: String = text.chars().take(max - ellipsis_len).collect();
    let mut clamped = head.trim_end().to_owned();
    clamped.push_str(ELLIPSIS);
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_short_text_unchanged() {
        assert_eq!(clamp("jail time", 180), "jail time");
        assert_eq!(clamp("", 0), "");
    }

    #[test]
    fn clamp_exact_length_unchanged() {
        let text = "a".repeat(180);
        assert_eq!(clamp(&text, 180), text);
    }

    #[test]
    fn clamp_long_text_gets_ellipsis() {
        let text = "b".repeat(200);
        let clamped = clamp(&text, 180);
        assert_eq!(clamped.chars().count(), 180);
        assert!(clamped.ends_with("..."));
        assert!(clamped.starts_with(&"b".repeat(177)));
    }

    #[test]
    fn clamp_trims_trailing_whitespace_before_ellipsis() {
        assert_eq!(clamp("abc   defghij", 9), "abc...");
    }

    #[test]
    fn clamp_never_exceeds_max() {
        let text = "monetary fines apply to every violation listed below";
        for max in 0..text.len() + 2 {
            assert!(clamp(text, max).chars().count() <= max, "max = {max}");
        }
    }

    #[test]
    fn clamp_counts_characters_not_bytes() {
        let text = "é".repeat(10);
        assert_eq!(clamp(&text, 10), text);
        assert_eq!(clamp(&text, 8), format!("{}...", "é".repeat(5)));
    }

    #[test]
    fn collapse_whitespace_joins_runs() {
        assert_eq!(collapse_whitespace("  arrest\n\n reasons \t list "), "arrest reasons list");
        assert_eq!(collapse_whitespace(" \n "), "");
    }

    #[test]
    fn snippet_starts_sixty_before_anchor() {
        let text: String = ('a'..='z').cycle().take(120).collect();
        let snippet = make_snippet(&text, 70);
        let expected: String = text.chars().skip(10).collect();
        assert_eq!(snippet, expected);
    }

    #[test]
    fn snippet_window_clamps_at_zero() {
        assert_eq!(make_snippet("short body", 5), "short body");
    }

    #[test]
    fn snippet_long_window_is_clamped() {
        let text = "x".repeat(500);
        let snippet = make_snippet(&text, 200);
        assert_eq!(snippet.chars().count(), 180);
        assert_eq!(snippet, format!("{}...", "x".repeat(177)));
    }

    #[test]
    fn snippet_anchor_past_body_is_empty() {
        assert_eq!(make_snippet("tiny", 500), "");
    }

    #[test]
    fn snippet_collapses_body_whitespace() {
        assert_eq!(make_snippet("speed\n\n  limits\tapply", 0), "speed limits apply");
    }
}
