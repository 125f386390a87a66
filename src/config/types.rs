//! Configuration data model.
//!
//! This module holds struct definitions plus default values. Loader and
//! source-resolution logic stays in `config::mod` so precedence behavior is
//! centralized.

use serde::Deserialize;
use std::path::PathBuf;

use crate::palette::ThemeMode;

use super::defaults::{
    DEFAULT_DATA_SOURCE, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_DIR,
};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Content source and output settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// File path or `http(s)` URL of the content bundle.
    pub data_source: String,
    pub output_dir: String,
    pub fetch_timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.into(),
            output_dir: DEFAULT_OUTPUT_DIR.into(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

/// Display / theming preferences.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    /// Platform color-scheme preference, used when no theme is stored.
    pub color_scheme: ThemeMode,
    /// Preference file override. Empty means the per-user default.
    pub prefs_path: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            color_scheme: ThemeMode::Dark,
            prefs_path: String::new(),
        }
    }
}

impl DisplayConfig {
    /// Explicit preference path, if one is configured.
    pub fn prefs_path_override(&self) -> Option<PathBuf> {
        let trimmed = self.prefs_path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when neither `TARVIX_LOG` nor `RUST_LOG` is set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.into(),
        }
    }
}

/// Result of explicit config initialization (`tarvix init`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalConfigInitResult {
    Created {
        path: PathBuf,
    },
    AlreadyInitialized {
        path: PathBuf,
    },
    Overwritten {
        path: PathBuf,
        backup_path: PathBuf,
    },
}
