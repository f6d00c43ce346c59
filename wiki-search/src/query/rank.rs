//! Result ordering: score descending, then title.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};

use super::MAX_RESULTS;
use crate::types::ScoredResult;

thread_local! {
    /// Root-locale tertiary collator, built once per thread from compiled data.
    static TITLE_COLLATOR: Option<Collator> = build_collator();
}

fn build_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            tracing::warn!(error = %err, "title collator unavailable, using code point order");
            None
        }
    }
}

/// Compare two titles with root-locale collation at tertiary strength.
///
/// Accents and case are secondary and tertiary differences, so `Économie`
/// sorts among the `E` titles, and on an otherwise equal pair lowercase
/// comes first.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

/// Total ranking order between two results.
pub fn compare_results(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| compare_titles(&a.title, &b.title))
}

/// Sort by [`compare_results`] and keep the first [`MAX_RESULTS`].
///
/// The sort is stable, so identical titles with identical scores keep
/// source order.
pub fn rank(mut results: Vec<ScoredResult>) -> Vec<ScoredResult> {
    results.sort_by(compare_results);
    results.truncate(MAX_RESULTS);
    results
}
