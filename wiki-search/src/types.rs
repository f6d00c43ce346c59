//! Core types: indexed documents, the loaded document set, and scored results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One indexed wiki page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Page title, shown verbatim on result cards.
    pub title: String,
    /// Link target. Opaque to the search engine.
    pub href: String,
    /// Full plain-text body. Empty when the index omits it.
    #[serde(default)]
    pub text: String,
}

impl Document {
    /// Create a document from its three fields.
    pub fn new(title: impl Into<String>, href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            text: text.into(),
        }
    }
}

/// The immutable document collection loaded from an index.
///
/// Source order is preserved and defines the default-view order. A set is
/// built once at load time and passed by reference into every
/// [`crate::search`] call; nothing mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSet {
    docs: Vec<Document>,
    updated_at: Option<String>,
}

impl DocumentSet {
    /// Build a set from documents in source order.
    pub fn new(docs: Vec<Document>) -> Self {
        Self {
            docs,
            updated_at: None,
        }
    }

    /// Attach the generation timestamp recorded by the index builder.
    #[must_use]
    pub fn with_updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = Some(updated_at.into());
        self
    }

    /// The documents in source order.
    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    /// Number of documents in the set.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the index held no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterate the documents in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.docs.iter()
    }

    /// The raw `updated_at` string from the index payload, if present.
    pub fn updated_at_raw(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    /// When the index was generated, if the payload carries a valid
    /// RFC 3339 `updated_at` timestamp.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.updated_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl AsRef<[Document]> for DocumentSet {
    fn as_ref(&self) -> &[Document] {
        &self.docs
    }
}

impl From<Vec<Document>> for DocumentSet {
    fn from(docs: Vec<Document>) -> Self {
        Self::new(docs)
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}

/// A document matched (or listed) by one query evaluation.
///
/// Batches of results are ordered by rank; a result is never mutated after
/// the evaluation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredResult {
    /// Title of the matched document.
    pub title: String,
    /// Link target of the matched document.
    pub href: String,
    /// Whitespace-collapsed excerpt near the first token match, at most
    /// [`crate::query::SNIPPET_MAX_CHARS`] characters. Empty in the default view.
    pub snippet: String,
    /// Positional relevance score. Zero in the default view.
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_text_defaults_to_empty() {
        let doc: Document =
            serde_json::from_str(r#"{"title":"Fines","href":"/wiki/fines.html"}"#).expect("parse");
        assert_eq!(doc.title, "Fines");
        assert!(doc.text.is_empty());
    }

    #[test]
    fn document_set_preserves_order() {
        let set = DocumentSet::new(vec![
            Document::new("B", "/b", ""),
            Document::new("A", "/a", ""),
        ]);
        let titles: Vec<&str> = set.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn updated_at_parses_rfc3339() {
        let set = DocumentSet::default().with_updated_at("2024-03-01T12:30:00Z");
        let ts = set.updated_at().expect("timestamp");
        assert_eq!(ts.to_rfc3339(), "2024-03-01T12:30:00+00:00");
        assert_eq!(set.updated_at_raw(), Some("2024-03-01T12:30:00Z"));
    }

    #[test]
    fn updated_at_invalid_is_none() {
        let set = DocumentSet::default().with_updated_at("yesterday");
        assert!(set.updated_at().is_none());
        assert!(DocumentSet::default().updated_at().is_none());
    }

    #[test]
    fn scored_result_serializes_all_fields() {
        let result = ScoredResult {
            title: "Arrests & Fines".into(),
            href: "/wiki/arrests-fines.html".into(),
            snippet: "jail time".into(),
            score: 5,
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["title"], "Arrests & Fines");
        assert_eq!(json["score"], 5);
    }
}
