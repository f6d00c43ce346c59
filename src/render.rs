//! Result views: the output side of the search box.
//!
//! A [`ResultView`] owns a result container and replaces its entire content on
//! every evaluation. There is no diffing; the previous batch is simply gone.

use std::io::Write;

use serde::Serialize;
use wiki_search::{DocumentSet, ScoredResult};

use crate::error::{Result, WikiError};

/// A container whose content is replaced by each result batch.
pub trait ResultView {
    /// Replace the container's content with `results`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError`] if the output cannot be written.
    fn replace(&mut self, results: &[ScoredResult]) -> Result<()>;

    /// Called once when the box binds to a loaded index, before the default
    /// view. Views that show index metadata override this.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError`] if the output cannot be written.
    fn index_loaded(&mut self, _index: &DocumentSet) -> Result<()> {
        Ok(())
    }
}

/// One clickable result card as exposed to the page: title, navigation
/// target, and optional snippet. Scores are not part of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultCard<'a> {
    pub title: &'a str,
    pub href: &'a str,
    pub snippet: &'a str,
}

impl<'a> From<&'a ScoredResult> for ResultCard<'a> {
    fn from(result: &'a ScoredResult) -> Self {
        Self {
            title: &result.title,
            href: &result.href,
            snippet: &result.snippet,
        }
    }
}

/// Renders cards as plain text blocks, preceded once by the index's
/// generation time when the payload carries one.
///
/// ```text
/// Updated: 2024-05-06 07:08 UTC
/// == 2 results ==
/// Alpha Report
///   /a
///   overview of alpha systems
///
/// Beta Notes
///   /b
/// ```
pub struct TextView<W: Write> {
    out: W,
}

impl<W: Write> TextView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultView for TextView<W> {
    fn index_loaded(&mut self, index: &DocumentSet) -> Result<()> {
        if let Some(ts) = index.updated_at() {
            writeln!(self.out, "Updated: {}", ts.format("%Y-%m-%d %H:%M UTC"))?;
        }
        Ok(())
    }

    fn replace(&mut self, results: &[ScoredResult]) -> Result<()> {
        let noun = if results.len() == 1 { "result" } else { "results" };
        writeln!(self.out, "== {} {noun} ==", results.len())?;
        for (i, result) in results.iter().enumerate() {
            if i > 0 {
                writeln!(self.out)?;
            }
            let card = ResultCard::from(result);
            writeln!(self.out, "{}", card.title)?;
            writeln!(self.out, "  {}", card.href)?;
            if !card.snippet.is_empty() {
                writeln!(self.out, "  {}", card.snippet)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Renders each batch as a single JSON array of cards on its own line.
pub struct JsonLinesView<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultView for JsonLinesView<W> {
    fn replace(&mut self, results: &[ScoredResult]) -> Result<()> {
        let cards: Vec<ResultCard<'_>> = results.iter().map(ResultCard::from).collect();
        serde_json::to_writer(&mut self.out, &cards)
            .map_err(|e| WikiError::Render(e.to_string()))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
