// crates/scholar-cli/src/config.rs
//
// Runtime configuration for the scholar CLI.
// Loaded from a TOML file or populated with sensible defaults.

use serde::Deserialize;
use std::fs;

use scholar_core::ScholarError;
use scholar_reputation::constants::{DEFAULT_PAPER_RATING, DEFAULT_REVIEW_QUALITY};
use scholar_reputation::CollectionPolicy;

use crate::output::OutputFormat;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "~/.scholarchains/config.toml";

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScholarConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    /// Overridden by RUST_LOG when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format: "table" or "json".
    #[serde(default = "default_output")]
    pub output: String,

    /// Average rating assumed for papers with no reviews (0-10).
    #[serde(default = "default_paper_rating")]
    pub default_paper_rating: f64,

    /// Quality assumed for reviews with no editor rating (1-5).
    #[serde(default = "default_review_quality")]
    pub default_review_quality: f64,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_output() -> String {
    "table".to_string()
}

fn default_paper_rating() -> f64 {
    DEFAULT_PAPER_RATING
}

fn default_review_quality() -> f64 {
    DEFAULT_REVIEW_QUALITY
}

impl Default for ScholarConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: default_output(),
            default_paper_rating: default_paper_rating(),
            default_review_quality: default_review_quality(),
        }
    }
}

impl ScholarConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// A leading `~/` is expanded to the home directory. Returns an error if
    /// the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, ScholarError> {
        let path = expand_tilde(path);
        let contents = fs::read_to_string(&path)
            .map_err(|e| ScholarError::Io(format!("{}: {}", path, e)))?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self, ScholarError> {
        toml::from_str(contents).map_err(|e| ScholarError::Config(e.to_string()))
    }

    /// Fallback ratings for contribution collection.
    pub fn policy(&self) -> CollectionPolicy {
        CollectionPolicy {
            default_paper_rating: self.default_paper_rating,
            default_review_quality: self.default_review_quality,
        }
    }

    /// Configured output format. Unknown values fall back to a table.
    pub fn output_format(&self) -> OutputFormat {
        self.output.parse().unwrap_or(OutputFormat::Table)
    }
}

pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}/{}", home.display(), rest);
        }
    }
    path.to_string()
}
