//! `palette`, `theme` and `accent` command helpers.
//!
//! Mode and accent changes are persisted through the preference store before
//! the resulting palette is reported.

use tarvix::appearance::Appearance;
use tarvix::error::SiteError;
use tarvix::palette::{AccentColor, ThemeMode};
use tarvix::prefs::PreferenceStore;
use tarvix::render::css::{render_json, render_root_block};

use crate::app::CommandContext;
use crate::cli::{PaletteFormat, ThemeAction};

/// Print the palette for the stored appearance, optionally overridden.
///
/// Overrides only affect this output; nothing is persisted.
pub(crate) fn handle_palette_command(
    ctx: &CommandContext<'_>,
    format: PaletteFormat,
    mode: Option<ThemeMode>,
    accent: Option<AccentColor>,
) -> Result<(), SiteError> {
    let store = ctx.preference_store()?;
    let resolved = Appearance::resolve(&store, ctx.config.display.color_scheme)?;
    let appearance = Appearance::new(
        mode.unwrap_or(resolved.mode),
        accent.unwrap_or(resolved.accent),
    );
    print!("{}", palette_output(&appearance, format)?);
    Ok(())
}

/// Show, toggle or set the theme mode.
pub(crate) fn handle_theme_command(
    ctx: &CommandContext<'_>,
    action: Option<ThemeAction>,
) -> Result<(), SiteError> {
    let store = ctx.preference_store()?;
    let current = Appearance::resolve(&store, ctx.config.display.color_scheme)?;
    let Some(action) = action else {
        report_appearance(ctx, "theme", &current);
        return Ok(());
    };
    let updated = apply_theme_action(&current, action, &store)?;
    report_appearance(ctx, &format!("switched theme: {}", updated.mode), &updated);
    ctx.renderer
        .field("saved_to", &store.path().display().to_string());
    Ok(())
}

/// Persist a new accent color.
pub(crate) fn handle_accent_command(
    ctx: &CommandContext<'_>,
    color: AccentColor,
) -> Result<(), SiteError> {
    let store = ctx.preference_store()?;
    let current = Appearance::resolve(&store, ctx.config.display.color_scheme)?;
    let updated = current.with_accent(color, &store)?;
    report_appearance(ctx, &format!("switched accent: {}", updated.accent), &updated);
    ctx.renderer
        .field("saved_to", &store.path().display().to_string());
    Ok(())
}

/// Mode change for one theme action, persisted to `store`.
pub(crate) fn apply_theme_action(
    current: &Appearance,
    action: ThemeAction,
    store: &dyn PreferenceStore,
) -> Result<Appearance, SiteError> {
    let updated = match action {
        ThemeAction::Toggle => current.toggle_mode(store)?,
        ThemeAction::Light => current.with_mode(ThemeMode::Light, store)?,
        ThemeAction::Dark => current.with_mode(ThemeMode::Dark, store)?,
    };
    Ok(updated)
}

/// Palette text in the requested format.
pub(crate) fn palette_output(
    appearance: &Appearance,
    format: PaletteFormat,
) -> Result<String, SiteError> {
    let palette = appearance.palette();
    Ok(match format {
        PaletteFormat::Css => render_root_block(&palette),
        PaletteFormat::Json => format!("{}\n", render_json(&palette)?),
    })
}

fn report_appearance(ctx: &CommandContext<'_>, title: &str, appearance: &Appearance) {
    let renderer = ctx.renderer;
    renderer.section(title);
    renderer.field("mode", &appearance.mode.to_string());
    renderer.field("accent", appearance.accent.as_str());
    renderer.field("toggle_icon", appearance.mode.toggle_icon());
    renderer.palette(&appearance.palette());
}
