//! `tarvix init`: config file paths and first-time config creation.
//!
//! A fresh file is opened with `create_new`, so a concurrent `init` never
//! truncates a config another process just wrote.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConfigError;

use super::defaults::{DEFAULT_TARVIX_CONFIG_TEMPLATE, PREFS_FILE_NAME};
use super::GlobalConfigInitResult;

const APP_DIR: &str = "tarvix";
const CONFIG_FILE_NAME: &str = "tarvix.toml";

/// `~/.config/tarvix/tarvix.toml`.
pub fn default_global_config_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
}

/// `~/.config/tarvix/prefs.toml`.
pub fn default_prefs_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(APP_DIR).join(PREFS_FILE_NAME))
}

/// Write the template to the per-user config path.
pub fn initialize_default_global_config(
    force: bool,
) -> Result<GlobalConfigInitResult, ConfigError> {
    let path = default_global_config_path().ok_or_else(|| {
        ConfigError::Invalid("no home or config directory to place tarvix.toml in".to_string())
    })?;
    initialize_config_at_path(&path, force)
}

/// Write the template to `path`.
///
/// An existing file is left alone unless `force` is set, in which case it is
/// copied to a `.bak` sibling first.
pub fn initialize_config_at_path(
    path: &Path,
    force: bool,
) -> Result<GlobalConfigInitResult, ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(DEFAULT_TARVIX_CONFIG_TEMPLATE.as_bytes())?;
            tracing::info!(path = %path.display(), "config created");
            Ok(GlobalConfigInitResult::Created {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists && !force => {
            Ok(GlobalConfigInitResult::AlreadyInitialized {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            let backup_path = backup_path_for(path);
            fs::copy(path, &backup_path)?;
            fs::write(path, DEFAULT_TARVIX_CONFIG_TEMPLATE)?;
            tracing::info!(
                path = %path.display(),
                backup = %backup_path.display(),
                "config overwritten"
            );
            Ok(GlobalConfigInitResult::Overwritten {
                path: path.to_path_buf(),
                backup_path,
            })
        }
        Err(e) => Err(ConfigError::Io(e)),
    }
}

/// First free `<name>.<unix-secs>[.<n>].bak` next to `path`.
fn backup_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| CONFIG_FILE_NAME.into(), |n| n.to_string_lossy().into_owned());
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let candidate = |n: u32| match n {
        0 => path.with_file_name(format!("{name}.{secs}.bak")),
        n => path.with_file_name(format!("{name}.{secs}.{n}.bak")),
    };
    (0..1000)
        .map(candidate)
        .find(|p| !p.exists())
        .unwrap_or_else(|| path.with_file_name(format!("{name}.{secs}.{}.bak", std::process::id())))
}

/// `$XDG_CONFIG_HOME`, else `~/.config`, else the platform config dir.
pub fn config_root_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .or_else(dirs::config_dir)
}
