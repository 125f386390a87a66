//! Tracing subscriber setup.
//!
//! Log lines go to stderr so stdout stays clean for CSS/HTML/JSON output.
//! Filter precedence: `TARVIX_LOG`, then `RUST_LOG`, then the configured
//! default, raised by each `-v`.

use tracing_subscriber::EnvFilter;

/// Filter directive for the configured level and `-v` count.
pub fn filter_directive(configured: &str, verbosity: u8) -> String {
    match verbosity {
        0 => {
            let trimmed = configured.trim();
            if trimmed.is_empty() {
                "warn".to_string()
            } else {
                trimmed.to_string()
            }
        }
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn build_filter(configured: &str, verbosity: u8) -> EnvFilter {
    if verbosity == 0 {
        for var in ["TARVIX_LOG", "RUST_LOG"] {
            if let Ok(filter) = EnvFilter::try_from_env(var) {
                return filter;
            }
        }
    }
    EnvFilter::try_new(filter_directive(configured, verbosity))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(configured: &str, verbosity: u8, color: bool) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured, verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .try_init();
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_configured_level() {
        assert_eq!(filter_directive("error", 0), "error");
        assert_eq!(filter_directive("  ", 0), "warn");
        assert_eq!(filter_directive("error", 1), "info");
        assert_eq!(filter_directive("error", 2), "debug");
        assert_eq!(filter_directive("error", 7), "trace");
    }

    #[test]
    fn invalid_directive_falls_back() {
        let filter = build_filter("not a [valid filter", 0);
        // Either an env filter or the fallback; constructing must not panic.
        let _ = filter.to_string();
    }
}
