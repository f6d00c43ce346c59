//! Query evaluation over a loaded document collection.
//!
//! Runs to completion synchronously: tokenise, score every document,
//! build snippets for matches, rank, truncate.

use crate::types::{Document, ScoredResult};

use super::normalize::{haystack, tokenize};
use super::rank::rank;
use super::scoring::score_document;
use super::snippet::make_snippet;

/// Evaluate `query` against `documents`.
///
/// # Pipeline
///
/// 1. Lowercase the query and split it into whitespace-delimited tokens
/// 2. No tokens: return the [`default_view`]
/// 3. Score each document's haystack; drop documents missing any token
/// 4. Build a snippet anchored at the first token's first occurrence
/// 5. Sort by score descending, then title ascending
/// 6. Truncate to [`super::MAX_RESULTS`]
///
/// Identical inputs always produce identical output.
pub fn search<D>(documents: &D, query: &str) -> Vec<ScoredResult>
where
    D: AsRef<[Document]> + ?Sized,
{
    let documents = documents.as_ref();
    let tokens = tokenize(query);
    tracing::trace!(query, tokens = tokens.len(), "evaluating query");

    if tokens.is_empty() {
        return default_view(documents);
    }

    let matches: Vec<ScoredResult> = documents
        .iter()
        .filter_map(|doc| {
            let found = score_document(&haystack(doc), &tokens)?;
            Some(ScoredResult {
                title: doc.title.clone(),
                href: doc.href.clone(),
                snippet: make_snippet(&doc.text, found.anchor),
                score: found.score,
            })
        })
        .collect();

    let matched = matches.len();
    let ranked = rank(matches);
    tracing::debug!(
        documents = documents.len(),
        matched,
        returned = ranked.len(),
        "query evaluated"
    );
    ranked
}

/// The result list shown for an empty query: every document in source
/// order, with no snippet and a zero score.
pub fn default_view<D>(documents: &D) -> Vec<ScoredResult>
where
    D: AsRef<[Document]> + ?Sized,
{
    documents
        .as_ref()
        .iter()
        .map(|doc| ScoredResult {
            title: doc.title.clone(),
            href: doc.href.clone(),
            snippet: String::new(),
            score: 0,
        })
        .collect()
}
