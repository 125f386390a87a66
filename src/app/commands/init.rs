//! `tarvix init` helpers.

use std::path::Path;

use tarvix::config::{
    initialize_config_at_path, initialize_default_global_config, GlobalConfigInitResult,
};
use tarvix::error::SiteError;

use crate::app::CommandContext;

/// Write the default config to `--config` when given, else the per-user path.
pub(crate) fn handle_init_command(ctx: &CommandContext<'_>, force: bool) -> Result<(), SiteError> {
    let result = match ctx.config_path {
        Some(path) => initialize_config_at_path(Path::new(path), force)?,
        None => initialize_default_global_config(force)?,
    };
    let renderer = ctx.renderer;
    match result {
        GlobalConfigInitResult::Created { path } => {
            renderer.section("initialized config");
            renderer.field("path", &path.display().to_string());
        }
        GlobalConfigInitResult::AlreadyInitialized { path } => {
            renderer.warn(&format!(
                "config already exists at {}; pass --force to overwrite",
                path.display()
            ));
        }
        GlobalConfigInitResult::Overwritten { path, backup_path } => {
            renderer.section("reinitialized config");
            renderer.field("path", &path.display().to_string());
            renderer.field("backup", &backup_path.display().to_string());
        }
    }
    Ok(())
}
