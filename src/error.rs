//! Unified error types for the site engine.

use std::fmt;

use crate::form::FormField;

// ---------------------------------------------------------------------------
// ColorError
// ---------------------------------------------------------------------------

/// Errors arising from accent-color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not a `#RRGGBB` hex color.
    InvalidColorFormat(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorFormat(input) => {
                write!(f, "invalid color format `{input}` (expected #RRGGBB)")
            }
        }
    }
}

impl std::error::Error for ColorError {}

// ---------------------------------------------------------------------------
// DataLoadError
// ---------------------------------------------------------------------------

/// Errors when fetching or decoding the content bundle.
#[derive(Debug)]
pub enum DataLoadError {
    Io(std::io::Error),
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the data host.
    Status(u16),
    Parse(serde_json::Error),
}

impl fmt::Display for DataLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status(code) => write!(f, "status {code}"),
            Self::Parse(e) => write!(f, "json: {e}"),
        }
    }
}

impl std::error::Error for DataLoadError {}

impl From<std::io::Error> for DataLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<reqwest::Error> for DataLoadError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for DataLoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// Contact-form validation failure listing every rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub fields: Vec<FormField>,
}

impl ValidationError {
    /// Blocking alert text shown when any field is rejected.
    pub const ALERT: &'static str = "Please fill all required fields correctly.";
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self
            .fields
            .iter()
            .map(|field| field.key())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{} (invalid: {names})", Self::ALERT)
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading, parsing, or persisting configuration and preferences.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// SiteError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for CLI orchestration.
#[derive(Debug)]
pub enum SiteError {
    Color(ColorError),
    DataLoad(DataLoadError),
    Validation(ValidationError),
    Config(ConfigError),
    /// Writing rendered output failed.
    Io(std::io::Error),
    /// Encoding JSON output failed.
    Encode(serde_json::Error),
    /// Requested section has no content in the loaded bundle.
    MissingSection(&'static str),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(e) => write!(f, "color: {e}"),
            Self::DataLoad(e) => write!(f, "data load: {e}"),
            Self::Validation(e) => write!(f, "validation: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Encode(e) => write!(f, "encode: {e}"),
            Self::MissingSection(name) => write!(f, "bundle has no `{name}` section"),
        }
    }
}

impl std::error::Error for SiteError {}

impl From<ColorError> for SiteError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}

impl From<DataLoadError> for SiteError {
    fn from(e: DataLoadError) -> Self {
        Self::DataLoad(e)
    }
}

impl From<ValidationError> for SiteError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ConfigError> for SiteError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(e: serde_json::Error) -> Self {
        Self::Encode(e)
    }
}

impl From<std::io::Error> for SiteError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_display() {
        assert_eq!(
            ColorError::InvalidColorFormat("#12".into()).to_string(),
            "invalid color format `#12` (expected #RRGGBB)"
        );
    }

    #[test]
    fn data_load_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e = DataLoadError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn data_load_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        assert!(DataLoadError::from(json_err).to_string().starts_with("json:"));
    }

    #[test]
    fn validation_error_lists_fields() {
        let e = ValidationError {
            fields: vec![FormField::Name, FormField::Email],
        };
        let s = e.to_string();
        assert!(s.starts_with(ValidationError::ALERT), "got: {s}");
        assert!(s.contains("name, email"), "got: {s}");
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn site_error_wraps_sources() {
        let se = SiteError::from(ColorError::InvalidColorFormat("zz".into()));
        assert!(se.to_string().starts_with("color:"), "got: {se}");
        let se = SiteError::from(ConfigError::Invalid("bad".into()));
        assert_eq!(se.to_string(), "config: invalid config: bad");
        assert_eq!(
            SiteError::MissingSection("team").to_string(),
            "bundle has no `team` section"
        );
    }
}
