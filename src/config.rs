//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::analyzer::RhymeAnalyzer;
use crate::constants::clustering::{SCHEME_THRESHOLD, STATISTICS_THRESHOLD};
use crate::error::{Error, Result};

/// Environment variable naming the vocabulary file.
pub const VOCABULARY_VAR: &str = "RHYMEFLOW_VOCABULARY";
/// Environment variable naming the lyrics directory.
pub const LYRICS_DIR_VAR: &str = "RHYMEFLOW_LYRICS_DIR";
/// Environment variable overriding the scheme threshold.
pub const SCHEME_THRESHOLD_VAR: &str = "RHYMEFLOW_SCHEME_THRESHOLD";
/// Environment variable overriding the statistics threshold.
pub const STATS_THRESHOLD_VAR: &str = "RHYMEFLOW_STATS_THRESHOLD";

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Pronunciation vocabulary (JSON map or CMU dictionary text)
    pub vocabulary_path: Option<PathBuf>,
    /// Directory of `.txt` lyrics files
    pub lyrics_dir: Option<PathBuf>,
    /// Merge threshold for rhyme schemes
    pub scheme_threshold: u8,
    /// Merge threshold for statistics rhyme groups
    pub statistics_threshold: u8,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Analyzer using the configured thresholds.
    pub const fn analyzer(&self) -> RhymeAnalyzer {
        RhymeAnalyzer {
            scheme_threshold: self.scheme_threshold,
            statistics_threshold: self.statistics_threshold,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            vocabulary_path: dirs::data_dir().map(|d| d.join("rhymeflow").join("vocabulary.json")),
            lyrics_dir: dirs::home_dir().map(|h| h.join("Documents/Lyrics")),
            scheme_threshold: SCHEME_THRESHOLD,
            statistics_threshold: STATISTICS_THRESHOLD,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Explicit paths are kept as given; defaults only when they exist
        config.vocabulary_path = lookup(VOCABULARY_VAR).map_or_else(
            || config.vocabulary_path.take().filter(|p| p.is_file()),
            |path| Some(expand_path(&path)),
        );
        config.lyrics_dir = lookup(LYRICS_DIR_VAR).map_or_else(
            || config.lyrics_dir.take().filter(|p| p.is_dir()),
            |path| Some(expand_path(&path)),
        );
        if let Some(value) = lookup(SCHEME_THRESHOLD_VAR) {
            config.scheme_threshold = parse_threshold(SCHEME_THRESHOLD_VAR, &value)?;
        }
        if let Some(value) = lookup(STATS_THRESHOLD_VAR) {
            config.statistics_threshold = parse_threshold(STATS_THRESHOLD_VAR, &value)?;
        }

        tracing::debug!(
            "Config: vocabulary {:?}, lyrics {:?}, thresholds {}/{}",
            config.vocabulary_path,
            config.lyrics_dir,
            config.scheme_threshold,
            config.statistics_threshold
        );
        Ok(config)
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

fn parse_threshold(var: &str, value: &str) -> Result<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|t| *t <= 100)
        .ok_or_else(|| {
            Error::config(
                format!("{var}={value} is not a valid threshold"),
                "Use a whole number from 0 to 100",
            )
        })
}
