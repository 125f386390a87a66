//! Binary-local application orchestration.
//!
//! `main.rs` owns startup wiring; this module dispatches one parsed
//! subcommand to its handler in `commands`.

pub(crate) mod commands;

use std::time::Duration;

use tarvix::config::{resolve_prefs_path, Config};
use tarvix::content::{load_bundle, ContentBundle, DataSource};
use tarvix::error::SiteError;
use tarvix::prefs::FilePreferenceStore;
use tarvix::ui::Renderer;

use crate::cli::Command;

/// Shared state handed to every command handler.
pub(crate) struct CommandContext<'a> {
    pub config: &'a Config,
    pub config_path: Option<&'a str>,
    pub renderer: &'a Renderer,
}

impl CommandContext<'_> {
    /// Preference store at the configured or default location.
    pub fn preference_store(&self) -> Result<FilePreferenceStore, SiteError> {
        let path = resolve_prefs_path(self.config)?;
        tracing::debug!(path = %path.display(), "using preference file");
        Ok(FilePreferenceStore::new(path))
    }

    /// Fetch the content bundle from the configured source.
    pub async fn load_bundle(&self) -> Result<ContentBundle, SiteError> {
        let source = DataSource::from_location(&self.config.site.data_source);
        let timeout = Duration::from_secs(self.config.site.fetch_timeout_secs);
        Ok(load_bundle(&source, timeout).await?)
    }
}

/// Run one subcommand to completion.
pub(crate) async fn run(command: Command, ctx: &CommandContext<'_>) -> Result<(), SiteError> {
    match command {
        Command::Palette {
            format,
            mode,
            accent,
        } => commands::theme::handle_palette_command(ctx, format, mode, accent),
        Command::Theme { action } => commands::theme::handle_theme_command(ctx, action),
        Command::Accent { color } => commands::theme::handle_accent_command(ctx, color),
        Command::Render { section, out } => {
            commands::site::handle_render_command(ctx, section, out.as_deref()).await
        }
        Command::Projects { filter } => commands::site::handle_projects_command(ctx, &filter).await,
        Command::Categories => commands::site::handle_categories_command(ctx).await,
        Command::Contact {
            name,
            email,
            message,
        } => commands::page::handle_contact_command(ctx, name, email, message),
        Command::Nav {
            scroll,
            viewport,
            document,
            sections,
        } => commands::page::handle_nav_command(scroll, viewport, document, &sections),
        Command::Init { force } => commands::init::handle_init_command(ctx, force),
    }
}
