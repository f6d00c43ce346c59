//! Query engine: normalise, score, snippet, rank, truncate.
//!
//! A query is lowercased and split on whitespace into tokens. Every token must
//! occur in a document's haystack for the document to match; each token then
//! contributes a positional bonus. Matches are ranked by score with a title
//! tie-break and cut to [`MAX_RESULTS`]. An empty query yields the default
//! view: every document in source order without snippets.

pub mod normalize;
pub mod rank;
pub mod scoring;
pub mod search;
pub mod snippet;

pub use search::{default_view, search};
pub use snippet::clamp;

/// Maximum number of results returned for a non-empty query.
pub const MAX_RESULTS: usize = 60;

/// Tokens first found before this haystack position score [`EARLY_MATCH_SCORE`].
pub const EARLY_MATCH_WINDOW: usize = 80;

/// Contribution of a token found within [`EARLY_MATCH_WINDOW`].
pub const EARLY_MATCH_SCORE: u32 = 5;

/// Contribution of a token found at or after [`EARLY_MATCH_WINDOW`].
pub const LATE_MATCH_SCORE: u32 = 1;

/// Characters of lead-in kept before the first token match in a snippet.
pub const SNIPPET_LEAD: usize = 60;

/// Raw body characters taken for a snippet before whitespace collapsing.
pub const SNIPPET_WINDOW: usize = 220;

/// Maximum snippet length in characters, ellipsis included.
pub const SNIPPET_MAX_CHARS: usize = 180;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";
