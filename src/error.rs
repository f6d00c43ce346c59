//! Error types for the knp-wiki host.

/// Top-level error type for the search host.
#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    /// Configuration file could not be parsed or serialized.
    #[error("config error: {0}")]
    Config(String),

    /// Results could not be rendered to the output.
    #[error("render error: {0}")]
    Render(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, WikiError>;
