//! Index loader configuration with sensible defaults.
//!
//! [`LoaderConfig`] controls how the index is fetched. Ranking thresholds are
//! fixed constants in [`crate::query`] and are not configurable.

use crate::error::SearchError;

/// Configuration for fetching a search index.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// User-Agent header sent with index requests.
    pub user_agent: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 8,
            user_agent: format!("knp-wiki-search/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl LoaderConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `user_agent` must not be blank
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(SearchError::Config("user_agent must not be empty".into()));
        }
        Ok(())
    }
}
