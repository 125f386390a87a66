//! Theme palette derivation.
//!
//! A palette is the full set of CSS custom properties the site stylesheet
//! reads. It is rebuilt from scratch out of one `{mode, accent}` pair on every
//! change; nothing here patches a previous palette in place.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

mod color;

pub use color::{shade, AccentColor};

/// Percentage applied to the accent for its darker tone.
pub const DARKEN_PERCENT: i32 = -20;

/// Light/dark display variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Suffix used to pick a role's mode-specific counterpart.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class shown on the theme toggle while this mode is active.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "fa-sun",
            Self::Dark => "fa-moon",
        }
    }

    /// Alpha of the accent-tinted dynamic background in this mode.
    fn dynamic_alpha(self) -> &'static str {
        match self {
            Self::Light => "0.08",
            Self::Dark => "0.12",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme mode `{other}` (expected light or dark)")),
        }
    }
}

/// Semantic role whose value is an alias into a per-mode design constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Primary,
    PrimaryDarken,
    Secondary,
    Tertiary,
    TextPrimary,
    TextSecondary,
    Border,
    Bg,
    BgAcrylic,
    BgCard,
    BgHeader,
    BgStatic,
    BgDynamic,
    Shadow,
    AcrylicBg,
}

impl Role {
    /// Variable name this role writes (without the leading `--`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "color-primary",
            Self::PrimaryDarken => "color-primary-darken",
            Self::Secondary => "color-secondary",
            Self::Tertiary => "color-tertiary",
            Self::TextPrimary => "color-text-primary",
            Self::TextSecondary => "color-text-secondary",
            Self::Border => "color-border",
            Self::Bg => "color-bg",
            Self::BgAcrylic => "color-bg-acrylic",
            Self::BgCard => "color-bg-card",
            Self::BgHeader => "color-bg-header",
            Self::BgStatic => "color-bg-static",
            Self::BgDynamic => "color-bg-dynamic",
            Self::Shadow => "color-shadow",
            Self::AcrylicBg => "acrylic-bg",
        }
    }

    /// Stem of the per-mode counterpart; the mode suffix is appended to it.
    fn counterpart(self) -> &'static str {
        match self {
            // The darker primary is authored as `primary-dark-<mode>`.
            Self::PrimaryDarken => "color-primary-dark",
            other => other.key(),
        }
    }

    pub fn all() -> &'static [Role] {
        &[
            Self::Primary,
            Self::PrimaryDarken,
            Self::Secondary,
            Self::Tertiary,
            Self::TextPrimary,
            Self::TextSecondary,
            Self::Border,
            Self::Bg,
            Self::BgAcrylic,
            Self::BgCard,
            Self::BgHeader,
            Self::BgStatic,
            Self::BgDynamic,
            Self::Shadow,
            Self::AcrylicBg,
        ]
    }
}

/// Complete set of derived display variables, keyed without the `--` prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PaletteVariableSet {
    vars: BTreeMap<String, String>,
}

impl PaletteVariableSet {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn set(&mut self, key: &str, value: impl Into<String>) {
        self.vars.insert(key.to_string(), value.into());
    }
}

/// Variables written from the accent alone, present in every palette.
pub const ACCENT_KEYS: &[&str] = &[
    "color-primary-rgb",
    "color-primary-light",
    "color-primary-dark",
    "color-bg-dynamic-light",
    "color-bg-dynamic-dark",
    "acrylic-bg-light",
    "acrylic-bg-dark",
    "neon-shadow",
    "color-primary-dark-light",
    "color-primary-dark-dark",
    "accent-button-bg",
];

/// Derive the full palette for `mode` and `accent`.
pub fn derive(mode: ThemeMode, accent: &AccentColor) -> PaletteVariableSet {
    let mut palette = PaletteVariableSet::default();
    let suffix = mode.suffix();

    for role in Role::all() {
        palette.set(
            role.key(),
            format!("var(--{}-{suffix})", role.counterpart()),
        );
    }

    let darker = shade(accent, DARKEN_PERCENT);
    palette.set("color-primary-rgb", accent.rgb_triplet());
    palette.set("color-primary-light", accent.as_str());
    palette.set("color-primary-dark", accent.as_str());
    palette.set("color-bg-dynamic-light", accent.rgba(ThemeMode::Light.dynamic_alpha()));
    palette.set("color-bg-dynamic-dark", accent.rgba(ThemeMode::Dark.dynamic_alpha()));
    palette.set(
        "acrylic-bg-light",
        format!(
            "linear-gradient(to right bottom, {}, {})",
            accent.rgba("0.05"),
            accent.rgba("0.01")
        ),
    );
    palette.set(
        "acrylic-bg-dark",
        format!(
            "linear-gradient(to right bottom, {}, transparent 70%)",
            accent.rgba("0.1")
        ),
    );
    palette.set("neon-shadow", format!("0 0 8px {}", accent.rgba("0.7")));
    palette.set("color-primary-dark-light", darker.as_str());
    palette.set("color-primary-dark-dark", darker.as_str());
    palette.set("accent-button-bg", accent.as_str());

    // Mode-selected finals override the alias layer.
    palette.set(Role::Primary.key(), accent.as_str());
    palette.set(Role::PrimaryDarken.key(), darker.as_str());
    palette.set(Role::BgDynamic.key(), accent.rgba(mode.dynamic_alpha()));

    palette
}
