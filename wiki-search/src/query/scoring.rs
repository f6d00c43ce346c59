//! Positional scoring with conjunctive token matching.
//!
//! Each query token is looked up by first occurrence in the document
//! haystack. A missing token excludes the document. Otherwise:
//!
//! ```text
//! score = Σ token_score(first_index(token))
//! token_score(i) = 5 if i < 80 else 1
//! ```
//!
//! The 80-character window biases ranking toward title and early-body matches.

use super::normalize::find_char_index;
use super::{EARLY_MATCH_SCORE, EARLY_MATCH_WINDOW, LATE_MATCH_SCORE};

/// Outcome of scoring one document that matched every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentMatch {
    /// Sum of the per-token contributions.
    pub score: u32,
    /// Haystack character index of the first token's first occurrence,
    /// or 0 when there are no tokens. Anchors the snippet window.
    pub anchor: usize,
}

/// Contribution of a single token whose first occurrence is at `index`.
pub fn token_score(index: usize) -> u32 {
    if index < EARLY_MATCH_WINDOW {
        EARLY_MATCH_SCORE
    } else {
        LATE_MATCH_SCORE
    }
}

/// Score a lowercased haystack against lowercased tokens.
///
/// Tokens are evaluated in query order and evaluation stops at the first
/// token that does not occur. Returns `None` when the document is excluded.
pub fn score_document(haystack: &str, tokens: &[String]) -> Option<DocumentMatch> {
    let mut score = 0;
    let mut anchor = None;

    for token in tokens {
        let index = find_char_index(haystack, token)?;
        if anchor.is_none() {
            anchor = Some(index);
        }
        score += token_score(index);
    }

    Some(DocumentMatch {
        score,
        anchor: anchor.unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_owned()).collect()
    }

    #[test]
    fn early_match_scores_five() {
        assert_eq!(token_score(0), 5);
        assert_eq!(token_score(79), 5);
    }

    #[test]
    fn late_match_scores_one() {
        assert_eq!(token_score(80), 1);
        assert_eq!(token_score(10_000), 1);
    }

    #[test]
    fn all_tokens_present_sums_contributions() {
        let haystack = format!("alpha report {}beta", "x".repeat(100));
        let m = score_document(&haystack, &tokens(&["alpha", "beta"])).expect("match");
        assert_eq!(m.score, 6);
        assert_eq!(m.anchor, 0);
    }

    #[test]
    fn missing_token_excludes_document() {
        assert!(score_document("alpha report overview", &tokens(&["alpha", "beta"])).is_none());
        assert!(score_document("alpha report overview", &tokens(&["beta", "alpha"])).is_none());
    }

    #[test]
    fn anchor_is_first_token_position_not_earliest() {
        let m = score_document("notes about beta and alpha", &tokens(&["alpha", "beta"]))
            .expect("match");
        assert_eq!(m.anchor, 21);
    }

    #[test]
    fn repeated_token_uses_first_occurrence() {
        let m = score_document("rules rules rules", &tokens(&["rules", "rules"])).expect("match");
        assert_eq!(m.score, 10);
    }

    #[test]
    fn no_tokens_matches_with_zero_score() {
        let m = score_document("anything", &[]).expect("match");
        assert_eq!(m, DocumentMatch { score: 0, anchor: 0 });
    }

    #[test]
    fn scoring_is_deterministic() {
        let t = tokens(&["fine"]);
        assert_eq!(
            score_document("monetary fines", &t),
            score_document("monetary fines", &t)
        );
    }
}
