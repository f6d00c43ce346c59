//! knp-wiki: interactive search over the static KNP Guide wiki.
//!
//! The host side of the search feature. The scoring core lives in the
//! [`wiki_search`] crate; this crate binds it to an input source and a result
//! view:
//!
//! - **Config**: TOML file naming the index source, loader and output settings
//! - **Search box**: one synchronous evaluation per input-change event
//! - **Views**: plain-text cards or newline-delimited JSON card arrays
//!
//! If the index cannot be loaded the search box is inert and nothing is
//! rendered.

pub mod config;
pub mod error;
pub mod render;
pub mod search_box;

pub use config::{OutputFormat, WikiConfig};
pub use error::{Result, WikiError};
pub use render::{JsonLinesView, ResultCard, ResultView, TextView};
pub use search_box::SearchBox;
