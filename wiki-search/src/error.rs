//! Error types for the wiki-search crate.
//!
//! Only the index loader can fail. Scoring and ranking operate on an
//! already-validated [`crate::DocumentSet`] and are infallible.

/// Errors that can occur while obtaining a search index.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The HTTP request for the index failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The index server answered with a non-success status code.
    #[error("unexpected status {0} fetching index")]
    Status(u16),

    /// The index payload is not valid JSON or has the wrong shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The index payload has no `docs` sequence.
    #[error("index payload has no docs sequence")]
    MissingDocs,

    /// Reading a file-backed index failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid loader configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for wiki-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
