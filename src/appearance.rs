//! Current theme mode + accent, resolved from and written back to preferences.
//!
//! `Appearance` is an immutable value. Every user action produces a new value
//! and persists the changed key before returning it, so the store and the
//! derived palette never drift apart.

use crate::error::ConfigError;
use crate::palette::{derive, AccentColor, PaletteVariableSet, ThemeMode};
use crate::prefs::{PreferenceStore, ACCENT_KEY, THEME_KEY};

/// Accent used when none is stored and the page is in light mode.
pub const DEFAULT_LIGHT_ACCENT: &str = "#0078D4";
/// Accent used when none is stored and the page is in dark mode.
pub const DEFAULT_DARK_ACCENT: &str = "#2899F5";

/// Theme mode and accent color in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub mode: ThemeMode,
    pub accent: AccentColor,
}

impl Appearance {
    pub fn new(mode: ThemeMode, accent: AccentColor) -> Self {
        Self { mode, accent }
    }

    /// Read the stored mode/accent, falling back to `platform` and mode defaults.
    pub fn resolve(store: &dyn PreferenceStore, platform: ThemeMode) -> Result<Self, ConfigError> {
        let mode = resolve_mode(store.get(THEME_KEY)?.as_deref(), platform);
        let accent = match store.get(ACCENT_KEY)? {
            Some(stored) => AccentColor::parse(&stored).unwrap_or_else(|err| {
                tracing::warn!(%err, "stored accent color is malformed; reading leniently");
                AccentColor::parse_lenient(&stored)
            }),
            None => default_accent(mode),
        };
        tracing::debug!(%mode, accent = %accent, "appearance resolved");
        Ok(Self { mode, accent })
    }

    /// Full palette for this appearance.
    pub fn palette(&self) -> PaletteVariableSet {
        derive(self.mode, &self.accent)
    }

    /// Flip light/dark and persist the new mode.
    pub fn toggle_mode(&self, store: &dyn PreferenceStore) -> Result<Self, ConfigError> {
        self.with_mode(self.mode.toggled(), store)
    }

    /// Switch to `mode` and persist it along with the current accent.
    ///
    /// The accent is written too so a defaulted accent stays fixed instead of
    /// following the new mode's default on the next `resolve`.
    pub fn with_mode(
        &self,
        mode: ThemeMode,
        store: &dyn PreferenceStore,
    ) -> Result<Self, ConfigError> {
        store.set(THEME_KEY, mode.suffix())?;
        store.set(ACCENT_KEY, self.accent.as_str())?;
        tracing::info!(%mode, "theme mode changed");
        Ok(Self {
            mode,
            accent: self.accent.clone(),
        })
    }

    /// Switch accent and persist it.
    pub fn with_accent(
        &self,
        accent: AccentColor,
        store: &dyn PreferenceStore,
    ) -> Result<Self, ConfigError> {
        store.set(ACCENT_KEY, accent.as_str())?;
        tracing::info!(accent = %accent, "accent color changed");
        Ok(Self {
            mode: self.mode,
            accent,
        })
    }
}

/// Stored `light` selects light mode; any other stored value selects dark;
/// nothing stored defers to the platform preference.
pub fn resolve_mode(stored: Option<&str>, platform: ThemeMode) -> ThemeMode {
    match stored {
        Some(value) if value == "light" => ThemeMode::Light,
        Some(_) => ThemeMode::Dark,
        None => platform,
    }
}

pub fn default_accent(mode: ThemeMode) -> AccentColor {
    let text = match mode {
        ThemeMode::Light => DEFAULT_LIGHT_ACCENT,
        ThemeMode::Dark => DEFAULT_DARK_ACCENT,
    };
    AccentColor::parse_lenient(text)
}
