//! Index loader: obtain a [`DocumentSet`] from a URL or a local file.
//!
//! [`fetch_index`] reports every failure as a [`SearchError`].
//! [`load_index`] is the soft boundary used by hosts: any failure becomes
//! `None`, meaning "search unavailable", and the host leaves its existing
//! content untouched. There are no retries and no caching.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::config::LoaderConfig;
use crate::error::{Result, SearchError};
use crate::http::build_client;
use crate::types::{Document, DocumentSet};

/// Where a search index is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSource {
    /// Fetched over HTTP(S).
    Url(url::Url),
    /// Read from the local filesystem.
    File(PathBuf),
}

impl FromStr for IndexSource {
    type Err = SearchError;

    /// `http://` and `https://` strings become [`IndexSource::Url`];
    /// anything else is treated as a file path.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SearchError::Config("index source must not be empty".into()));
        }
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = url::Url::parse(trimmed)
                .map_err(|e| SearchError::Config(format!("invalid index URL: {e}")))?;
            Ok(Self::Url(url))
        } else {
            Ok(Self::File(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for IndexSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One entry of the payload's `docs` sequence.
#[derive(Deserialize)]
struct RawDocument {
    title: String,
    href: String,
    #[serde(default)]
    text: Option<String>,
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        Document {
            title: raw.title,
            href: raw.href,
            text: raw.text.unwrap_or_default(),
        }
    }
}

/// Parse an index payload of the form
/// `{"docs": [{"title", "href", "text"?}], "updated_at"?: "..."}`.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] for malformed JSON or malformed entries, and
/// [`SearchError::MissingDocs`] when `docs` is absent or not a sequence.
pub fn parse_index(payload: &str) -> Result<DocumentSet> {
    let mut value: Value =
        serde_json::from_str(payload).map_err(|e| SearchError::Parse(e.to_string()))?;

    let docs = match value.get_mut("docs").map(Value::take) {
        Some(docs @ Value::Array(_)) => docs,
        _ => return Err(SearchError::MissingDocs),
    };
    let raw: Vec<RawDocument> =
        serde_json::from_value(docs).map_err(|e| SearchError::Parse(e.to_string()))?;

    let set = DocumentSet::new(raw.into_iter().map(Document::from).collect());
    Ok(match value.get("updated_at").and_then(Value::as_str) {
        Some(updated_at) => set.with_updated_at(updated_at),
        None => set,
    })
}

/// Fetch and parse an index, reporting any failure.
///
/// # Errors
///
/// - [`SearchError::Config`] if `config` is invalid
/// - [`SearchError::Http`] on transport failure
/// - [`SearchError::Status`] on a non-success status code
/// - [`SearchError::Io`] if a file source cannot be read
/// - [`SearchError::Parse`] / [`SearchError::MissingDocs`] for a bad payload
pub async fn fetch_index(source: &IndexSource, config: &LoaderConfig) -> Result<DocumentSet> {
    config.validate()?;

    let payload = match source {
        IndexSource::Url(url) => fetch_url(url, config).await?,
        IndexSource::File(path) => tokio::fs::read_to_string(path).await?,
    };

    let set = parse_index(&payload)?;
    let updated_at = set
        .updated_at()
        .map_or_else(|| "unknown".to_owned(), |ts| ts.to_rfc3339());
    tracing::info!(%source, docs = set.len(), %updated_at, "search index loaded");
    Ok(set)
}

/// Fetch an index, mapping every failure to `None`.
///
/// Failures are logged at warn level for operators and never propagated.
pub async fn load_index(source: &IndexSource, config: &LoaderConfig) -> Option<DocumentSet> {
    match fetch_index(source, config).await {
        Ok(set) => Some(set),
        Err(err) => {
            tracing::warn!(%source, error = %err, "search index unavailable");
            None
        }
    }
}

async fn fetch_url(url: &url::Url, config: &LoaderConfig) -> Result<String> {
    let client = build_client(config)?;
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| SearchError::Http(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::Status(status.as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| SearchError::Http(format!("failed to read index body: {e}")))
}
