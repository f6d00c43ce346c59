//! Configuration for the search host.
//!
//! Loaded from TOML with `#[serde(default)]` on every table, so a partial
//! file only overrides what it names. Command-line flags take precedence over
//! file values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use wiki_search::LoaderConfig;

/// Top-level host configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    /// Where the search index lives.
    pub index: IndexConfig,
    /// How the index is fetched.
    pub loader: LoaderSettings,
    /// How results are written.
    pub output: OutputConfig,
}

/// Index location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// URL (`http://`, `https://`) or file path of `search-index.json`.
    pub source: Option<String>,
}

/// Index fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// User-Agent override (None = library default).
    pub user_agent: Option<String>,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: LoaderConfig::default().timeout_seconds,
            user_agent: None,
        }
    }
}

/// Result output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How result cards are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable cards.
    #[default]
    Text,
    /// One JSON array of cards per evaluation.
    Json,
}

impl WikiConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::WikiError::Config(e.to_string()))
    }

    /// Load `path` if it exists, otherwise return the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> crate::error::Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::WikiError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Loader settings for the search library.
    pub fn loader_config(&self) -> LoaderConfig {
        let defaults = LoaderConfig::default();
        LoaderConfig {
            timeout_seconds: self.loader.timeout_seconds,
            user_agent: self
                .loader
                .user_agent
                .clone()
                .unwrap_or(defaults.user_agent),
        }
    }
}

/// Config directory.
///
/// Resolves to `dirs::config_dir()/knp-wiki/` by default. Override with
/// the `KNP_WIKI_CONFIG_DIR` environment variable.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("KNP_WIKI_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("knp-wiki"))
        .unwrap_or_else(|| PathBuf::from("/tmp/knp-wiki-config"))
}

/// Default config file path (`config_dir()/config.toml`).
#[must_use]
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}
