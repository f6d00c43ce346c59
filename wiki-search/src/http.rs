//! Shared HTTP client for index requests.
//!
//! Every request carries `Cache-Control: no-cache` and `Pragma: no-cache` so
//! intermediaries revalidate and a stale index is never served.

use crate::config::LoaderConfig;
use crate::error::SearchError;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use std::time::Duration;

/// Build a [`reqwest::Client`] configured for fetching the search index.
///
/// The client has:
/// - Timeout from config
/// - User-Agent from config
/// - No-cache request headers
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &LoaderConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .default_headers(no_cache_headers())
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

fn no_cache_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_client_with_default_config() {
        let config = LoaderConfig::default();
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn build_client_with_custom_ua() {
        let config = LoaderConfig {
            user_agent: "CustomBot/1.0".into(),
            ..Default::default()
        };
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn no_cache_headers_present() {
        let headers = no_cache_headers();
        assert_eq!(headers.get(CACHE_CONTROL).map(|v| v.as_bytes()), Some(&b"no-cache"[..]));
        assert_eq!(headers.get(PRAGMA).map(|v| v.as_bytes()), Some(&b"no-cache"[..]));
    }
}
