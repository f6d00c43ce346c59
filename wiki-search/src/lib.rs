//! # wiki-search
//!
//! In-memory ranked search over a small static wiki index.
//!
//! The index is loaded once into an immutable [`DocumentSet`] and every query
//! is evaluated synchronously against it. There is no server, no persistent
//! storage, and no caching.
//!
//! ## Design
//!
//! - Conjunctive matching: every whitespace-delimited query token must occur
//!   as a substring of the lowercased title and body
//! - Positional scoring: tokens found near the start score higher
//! - Ranking by score, then title; at most [`query::MAX_RESULTS`] results
//! - Snippets cut around the first token match
//! - Soft-failing loader: an unreachable or malformed index means "search
//!   unavailable", never an error surfaced to the user
//!
//! ## Example
//!
//! ```
//! use wiki_search::{Document, DocumentSet};
//!
//! let docs = DocumentSet::new(vec![
//!     Document::new("Alpha Report", "/a", "overview of alpha systems"),
//!     Document::new("Beta Notes", "/b", "notes about beta and alpha integration"),
//! ]);
//! let results = wiki_search::search(&docs, "alpha beta");
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].title, "Beta Notes");
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod loader;
pub mod query;
pub mod types;

pub use config::LoaderConfig;
pub use error::{Result, SearchError};
pub use loader::{fetch_index, load_index, parse_index, IndexSource};
pub use query::{clamp, default_view, search};
pub use types::{Document, DocumentSet, ScoredResult};
