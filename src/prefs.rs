//! Local key/value preference persistence.
//!
//! Preferences live in a small TOML file under a `[preferences]` table. Writes
//! are synchronous and touch only the key being set so hand edits elsewhere in
//! the file survive.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Deserialize;

use crate::error::ConfigError;

/// Stored theme mode key (`light` | `dark`).
pub const THEME_KEY: &str = "theme";
/// Stored accent color key (`#RRGGBB`).
pub const ACCENT_KEY: &str = "accentColor";

const SECTION: &str = "preferences";

/// Key/value preference store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ConfigError>;
}

/// In-process store, used by tests and one-shot previews.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: Mutex::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let values = self
            .values
            .lock()
            .map_err(|_| ConfigError::Invalid("preference store lock poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| ConfigError::Invalid("preference store lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// TOML-file-backed store.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PreferenceFile {
    preferences: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, ConfigError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        let parsed: PreferenceFile = toml::from_str(&text)?;
        Ok(parsed.preferences)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let existing = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        let updated = upsert_key(&existing, SECTION, key, value);
        std::fs::write(&self.path, updated)?;
        tracing::debug!(path = %self.path.display(), key, value, "preference saved");
        Ok(())
    }
}

/// Upsert `section.key` while preserving unrelated file contents.
fn upsert_key(input: &str, section: &str, key: &str, value: &str) -> String {
    let header = format!("[{section}]");
    let assignment = format!("{key} = {}", toml_string(value));
    let mut lines = if input.is_empty() {
        Vec::new()
    } else {
        input.lines().map(str::to_string).collect::<Vec<_>>()
    };

    let section_idx = lines
        .iter()
        .position(|line| line.trim().eq_ignore_ascii_case(&header));

    if let Some(start) = section_idx {
        let end = lines
            .iter()
            .enumerate()
            .skip(start + 1)
            .find(|(_, line)| {
                let trimmed = line.trim();
                trimmed.starts_with('[') && trimmed.ends_with(']')
            })
            .map_or(lines.len(), |(idx, _)| idx);

        for idx in (start + 1)..end {
            if is_assignment_key(&lines[idx], key) {
                lines[idx] = assignment;
                return ensure_trailing_newline(lines.join("\n"));
            }
        }

        lines.insert(start + 1, assignment);
        return ensure_trailing_newline(lines.join("\n"));
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(header);
    lines.push(assignment);
    ensure_trailing_newline(lines.join("\n"))
}

/// Return true when `line` assigns a value to `key` (e.g., `key = ...`).
fn is_assignment_key(line: &str, key: &str) -> bool {
    let trimmed = line.trim_start();
    let Some(rest) = trimmed.strip_prefix(key) else {
        return false;
    };
    rest.trim_start().starts_with('=')
}

fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;

    #[test]
    fn inserts_section_when_missing() {
        let out = upsert_key("", "preferences", "theme", "light");
        assert_eq!(out, "[preferences]\ntheme = \"light\"\n");
    }

    #[test]
    fn inserts_key_into_existing_section() {
        let input = "[preferences]\ntheme = \"dark\"\n";
        let out = upsert_key(input, "preferences", "accentColor", "#2899F5");
        assert_eq!(
            out,
            "[preferences]\naccentColor = \"#2899F5\"\ntheme = \"dark\"\n"
        );
    }

    #[test]
    fn replaces_existing_value_and_keeps_other_tables() {
        let input = "[site]\nname = \"x\"\n\n[preferences]\ntheme = \"dark\"\n\n[other]\ntheme = \"keep\"\n";
        let out = upsert_key(input, "preferences", "theme", "light");
        assert_eq!(
            out,
            "[site]\nname = \"x\"\n\n[preferences]\ntheme = \"light\"\n\n[other]\ntheme = \"keep\"\n"
        );
    }

    #[test]
    fn key_prefix_does_not_match_longer_key() {
        let input = "[preferences]\nthemeName = \"a\"\n";
        let out = upsert_key(input, "preferences", "theme", "dark");
        assert_eq!(out, "[preferences]\ntheme = \"dark\"\nthemeName = \"a\"\n");
    }

    #[test]
    fn file_store_round_trips_and_reads_missing_as_absent() {
        let dir = TestTempDir::new("prefs");
        let store = FilePreferenceStore::new(dir.child("nested/prefs.toml"));
        assert_eq!(store.get(THEME_KEY).expect("get"), None);
        store.set(THEME_KEY, "light").expect("set theme");
        store.set(ACCENT_KEY, "#0078D4").expect("set accent");
        assert_eq!(store.get(THEME_KEY).expect("get").as_deref(), Some("light"));
        assert_eq!(store.get(ACCENT_KEY).expect("get").as_deref(), Some("#0078D4"));
    }

    #[test]
    fn file_store_reports_corrupt_toml() {
        let dir = TestTempDir::new("prefs-bad");
        let path = dir.write_text("prefs.toml", "[preferences\ntheme = ");
        let err = FilePreferenceStore::new(path).get(THEME_KEY).expect_err("corrupt");
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn memory_store_sets_and_gets() {
        let store = MemoryPreferenceStore::with_values([(THEME_KEY, "dark")]);
        assert_eq!(store.get(THEME_KEY).expect("get").as_deref(), Some("dark"));
        store.set(ACCENT_KEY, "#123456").expect("set");
        assert_eq!(store.get(ACCENT_KEY).expect("get").as_deref(), Some("#123456"));
    }
}
