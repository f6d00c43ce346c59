//! The search box: binds input-change events to query evaluation and view
//! replacement.
//!
//! A box is bound once, after the index load has resolved. With an index it
//! renders the default view immediately and then re-renders on every input
//! event. Without one it is inert for the rest of the session: it never
//! touches the view, so whatever the host already shows stays in place.

use std::io::BufRead;

use wiki_search::DocumentSet;

use crate::error::Result;
use crate::render::ResultView;

/// A search input bound to a result view.
pub struct SearchBox<V: ResultView> {
    index: Option<DocumentSet>,
    view: V,
}

impl<V: ResultView> SearchBox<V> {
    /// Bind the box to a loaded index (or `None` when loading failed).
    ///
    /// With an index, the view is told about it and the default view is
    /// rendered before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial render fails.
    pub fn bind(index: Option<DocumentSet>, view: V) -> Result<Self> {
        let mut search_box = Self { index, view };
        if let Some(index) = &search_box.index {
            search_box.view.index_loaded(index)?;
            search_box.on_input("")?;
        } else {
            tracing::info!("search index unavailable; search box is inert");
        }
        Ok(search_box)
    }

    /// Whether an index was loaded and input events are acted on.
    pub fn is_active(&self) -> bool {
        self.index.is_some()
    }

    /// Handle one input-change event carrying the input's full new value.
    ///
    /// Runs one synchronous search and replaces the view's content. Does
    /// nothing when the box is inert.
    ///
    /// # Errors
    ///
    /// Returns an error if the view cannot be updated.
    pub fn on_input(&mut self, value: &str) -> Result<()> {
        let Some(index) = &self.index else {
            return Ok(());
        };
        let results = wiki_search::search(index, value);
        self.view.replace(&results)
    }

    /// Treat each line of `input` as one input-change event until EOF.
    ///
    /// Lines that are not valid UTF-8 are logged and skipped. Returns the
    /// number of events handled.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or updating the view fails.
    pub fn listen<R: BufRead>(&mut self, input: R) -> Result<usize> {
        let mut events = 0;
        for line in input.split(b'\n') {
            let mut bytes = line?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            match String::from_utf8(bytes) {
                Ok(value) => {
                    self.on_input(&value)?;
                    events += 1;
                }
                Err(err) => tracing::warn!(error = %err, "skipping input line that is not UTF-8"),
            }
        }
        tracing::debug!(events, "input closed");
        Ok(events)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}
