//! Default configuration constants.
//!
//! Keeping defaults in one module lets the template, the serde defaults, and
//! the tests share the same literals.

/// Embedded default `tarvix.toml` template written by `tarvix init`.
pub(super) const DEFAULT_TARVIX_CONFIG_TEMPLATE: &str = include_str!("../templates/tarvix.toml");
/// Default content bundle location.
pub(super) const DEFAULT_DATA_SOURCE: &str = "assets/data/data.json";
/// Default directory for rendered fragments.
pub(super) const DEFAULT_OUTPUT_DIR: &str = "dist";
/// Default timeout for remote bundle fetches.
pub(super) const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;
/// Default tracing filter when no env filter is set.
pub(super) const DEFAULT_LOG_LEVEL: &str = "warn";
/// File name of the preference store under the config directory.
pub(super) const PREFS_FILE_NAME: &str = "prefs.toml";
