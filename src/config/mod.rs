//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`TARVIX_DATA_SOURCE`, `TARVIX_PREFS_PATH`,
//!    `TARVIX_COLOR_SCHEME`, `TARVIX_FETCH_TIMEOUT_SECS`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./tarvix.toml in the current directory
//! 4. $XDG_CONFIG_HOME/tarvix/tarvix.toml (or ~/.config/tarvix/tarvix.toml)
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

mod defaults;
mod env;
mod init;
mod types;

use env::apply_runtime_env_overrides;
pub use init::{
    config_root_dir, default_global_config_path, default_prefs_path,
    initialize_config_at_path, initialize_default_global_config,
};
pub use types::{Config, DisplayConfig, GlobalConfigInitResult, LoggingConfig, SiteConfig};

/// Which file (if any) supplied the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local,
    Global(PathBuf),
    BuiltInDefaults,
}

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    Ok(load_config_with_source(path_override)?.0)
}

/// Load configuration and report where it came from.
pub fn load_config_with_source(
    path_override: Option<&str>,
) -> Result<(Config, ConfigSource), ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<(Config, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) = read_config_text(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&config_text)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    validate(&config)?;
    tracing::debug!(?source, data_source = %config.site.data_source, "config loaded");
    Ok((config, source))
}

fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }
    if let Ok(text) = read_file(Path::new("tarvix.toml")) {
        return Ok((text, ConfigSource::Local));
    }
    if let Some(dir) = config_root() {
        let global = dir.join("tarvix").join("tarvix.toml");
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }
    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.site.data_source.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "site.data_source cannot be empty".to_string(),
        ));
    }
    if config.site.fetch_timeout_secs == 0 {
        return Err(ConfigError::Invalid(
            "site.fetch_timeout_secs must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Preference file path: explicit config value, else the per-user default.
pub fn resolve_prefs_path(config: &Config) -> Result<PathBuf, ConfigError> {
    if let Some(path) = config.display.prefs_path_override() {
        return Ok(path);
    }
    default_prefs_path().ok_or_else(|| {
        ConfigError::Invalid("unable to resolve default preference file path".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ThemeMode;
    use std::collections::BTreeMap;
    use std::io;

    fn not_found(_: &Path) -> Result<String, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn built_in_defaults_when_no_file() {
        let (config, source) =
            load_config_from_sources(None, not_found, no_env, || None).expect("load");
        assert_eq!(source, ConfigSource::BuiltInDefaults);
        assert_eq!(config, Config::default());
        assert_eq!(config.site.data_source, "assets/data/data.json");
        assert_eq!(config.display.color_scheme, ThemeMode::Dark);
    }

    #[test]
    fn embedded_template_parses_to_defaults() {
        let config: Config =
            toml::from_str(defaults::DEFAULT_TARVIX_CONFIG_TEMPLATE).expect("template");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn explicit_file_is_read() {
        let read = |path: &Path| -> Result<String, io::Error> {
            assert_eq!(path, Path::new("custom.toml"));
            Ok("[display]\ncolor_scheme = \"light\"\n".to_string())
        };
        let (config, source) =
            load_config_from_sources(Some("custom.toml"), read, no_env, || None).expect("load");
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("custom.toml")));
        assert_eq!(config.display.color_scheme, ThemeMode::Light);
    }

    #[test]
    fn global_file_used_when_no_local() {
        let read = |path: &Path| -> Result<String, io::Error> {
            if path == Path::new("/cfg/tarvix/tarvix.toml") {
                Ok("[site]\noutput_dir = \"public\"\n".to_string())
            } else {
                not_found(path)
            }
        };
        let (config, source) =
            load_config_from_sources(None, read, no_env, || Some(PathBuf::from("/cfg")))
                .expect("load");
        assert_eq!(
            source,
            ConfigSource::Global(PathBuf::from("/cfg/tarvix/tarvix.toml"))
        );
        assert_eq!(config.site.output_dir, "public");
    }

    #[test]
    fn env_overrides_file_values() {
        let env: BTreeMap<&str, &str> = [
            ("TARVIX_DATA_SOURCE", "https://tarvix.dev/data.json"),
            ("TARVIX_COLOR_SCHEME", "light"),
            ("TARVIX_FETCH_TIMEOUT_SECS", "0"),
        ]
        .into_iter()
        .collect();
        let (config, _) = load_config_from_sources(
            None,
            not_found,
            |name| env.get(name).map(|v| v.to_string()),
            || None,
        )
        .expect("load");
        assert_eq!(config.site.data_source, "https://tarvix.dev/data.json");
        assert_eq!(config.display.color_scheme, ThemeMode::Light);
        assert_eq!(config.site.fetch_timeout_secs, 1);
    }

    #[test]
    fn invalid_env_scheme_is_rejected() {
        let err = load_config_from_sources(
            None,
            not_found,
            |name| (name == "TARVIX_COLOR_SCHEME").then(|| "sepia".to_string()),
            || None,
        )
        .expect_err("must reject");
        assert!(err.to_string().contains("TARVIX_COLOR_SCHEME"), "got: {err}");
    }

    #[test]
    fn empty_data_source_is_invalid() {
        let read = |_: &Path| -> Result<String, io::Error> {
            Ok("[site]\ndata_source = \" \"\n".to_string())
        };
        let err = load_config_from_sources(Some("x.toml"), read, no_env, || None)
            .expect_err("must reject");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn prefs_path_prefers_explicit_value() {
        let mut config = Config::default();
        config.display.prefs_path = "/tmp/tarvix-prefs.toml".into();
        assert_eq!(
            resolve_prefs_path(&config).expect("path"),
            PathBuf::from("/tmp/tarvix-prefs.toml")
        );
    }
}
