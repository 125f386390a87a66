//! Single-shot content bundle fetch.
//!
//! One attempt, no retry. A failure is logged and returned; callers leave the
//! dependent sections unrendered.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::DataLoadError;

use super::ContentBundle;

/// Where the content bundle lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// Classify a configured location: `http(s)://` is remote, anything else a path.
    pub fn from_location(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Decode a bundle from JSON text.
pub fn parse_bundle(text: &str) -> Result<ContentBundle, DataLoadError> {
    Ok(serde_json::from_str(text)?)
}

/// Fetch and decode the bundle from `source`.
pub async fn load_bundle(
    source: &DataSource,
    timeout: Duration,
) -> Result<ContentBundle, DataLoadError> {
    tracing::debug!(%source, "loading content bundle");
    let result = match source {
        DataSource::File(path) => match tokio::fs::read_to_string(path).await {
            Ok(text) => parse_bundle(&text),
            Err(e) => Err(DataLoadError::Io(e)),
        },
        DataSource::Url(url) => fetch_remote(url, timeout).await,
    };
    match &result {
        Ok(bundle) => tracing::info!(
            %source,
            projects = bundle.projects.as_ref().map_or(0, Vec::len),
            team = bundle.team.as_ref().map_or(0, Vec::len),
            "content bundle loaded"
        ),
        Err(err) => tracing::error!(%source, error = %err, "error loading application data"),
    }
    result
}

async fn fetch_remote(url: &str, timeout: Duration) -> Result<ContentBundle, DataLoadError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(DataLoadError::Status(status.as_u16()));
    }
    let text = response.text().await?;
    parse_bundle(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;

    #[test]
    fn classifies_locations() {
        assert_eq!(
            DataSource::from_location("https://tarvix.dev/data.json"),
            DataSource::Url("https://tarvix.dev/data.json".into())
        );
        assert_eq!(
            DataSource::from_location(" assets/data/data.json "),
            DataSource::File(PathBuf::from("assets/data/data.json"))
        );
    }

    #[test]
    fn parse_bundle_reports_json_errors() {
        let err = parse_bundle("{\"projects\": [").expect_err("must fail");
        assert!(matches!(err, DataLoadError::Parse(_)));
    }

    #[tokio::test]
    async fn loads_bundle_from_file() {
        let dir = TestTempDir::new("loader");
        let path = dir.write_text(
            "data.json",
            r#"{"contact": {"title": "Say hello"}}"#,
        );
        let bundle = load_bundle(&DataSource::File(path), Duration::from_secs(1))
            .await
            .expect("bundle");
        assert_eq!(
            bundle.contact.and_then(|c| c.title).as_deref(),
            Some("Say hello")
        );
    }

    #[tokio::test]
    async fn missing_file_is_io_failure() {
        let dir = TestTempDir::new("loader-missing");
        let err = load_bundle(&DataSource::File(dir.child("nope.json")), Duration::from_secs(1))
            .await
            .expect_err("must fail");
        assert!(matches!(err, DataLoadError::Io(_)));
    }
}
