//! Environment overrides.
//!
//! `TARVIX_*` variables override whatever the config file resolved.

use crate::error::ConfigError;

use super::Config;

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(source) = non_empty(env_lookup("TARVIX_DATA_SOURCE")) {
        config.site.data_source = source;
    }
    if let Some(path) = non_empty(env_lookup("TARVIX_PREFS_PATH")) {
        config.display.prefs_path = path;
    }
    if let Some(scheme) = non_empty(env_lookup("TARVIX_COLOR_SCHEME")) {
        config.display.color_scheme = scheme.parse().map_err(|e: String| {
            ConfigError::Invalid(format!("invalid TARVIX_COLOR_SCHEME: {e}"))
        })?;
    }
    if let Some(timeout) = non_empty(env_lookup("TARVIX_FETCH_TIMEOUT_SECS")) {
        // Clamp to at least 1 second to avoid "no-timeout" accidental behavior.
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid TARVIX_FETCH_TIMEOUT_SECS value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        config.site.fetch_timeout_secs = parsed.max(1);
    }
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
