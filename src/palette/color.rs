//! Accent color value and the shade transform.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

/// A 24-bit RGB accent color.
///
/// `text` keeps the color exactly as authored so verbatim palette entries
/// (`--color-primary`, the accent swatch) echo the user's spelling, while
/// derived entries are computed from the parsed channels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccentColor {
    text: String,
    rgb: [u8; 3],
}

impl AccentColor {
    /// Parse a strict `#RRGGBB` color.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let invalid = || ColorError::InvalidColorFormat(input.to_string());
        let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
        Ok(Self {
            text: trimmed.to_string(),
            rgb: [r, g, b],
        })
    }

    /// Parse with the legacy tolerance: any channel that is not two valid hex
    /// digits (including ones cut short by a short string) reads as `0`.
    ///
    /// Only used for values already sitting in a preference store.
    pub fn parse_lenient(input: &str) -> Self {
        let trimmed = input.trim();
        let channel = |start: usize| -> u8 {
            let digits: String = trimmed.chars().skip(start).take(2).collect();
            leading_hex_value(&digits)
        };
        Self {
            text: trimmed.to_string(),
            rgb: [channel(1), channel(3), channel(5)],
        }
    }

    /// Build a color from channels; text is the lowercase canonical form.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            text: format!("#{r:02x}{g:02x}{b:02x}"),
            rgb: [r, g, b],
        }
    }

    /// Color as authored.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let [r, g, b] = self.rgb;
        (r, g, b)
    }

    /// Lowercase `#rrggbb` encoding of the parsed channels.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Decimal channels joined as `R, G, B`.
    pub fn rgb_triplet(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("{r}, {g}, {b}")
    }

    /// CSS `rgba()` of this color at `alpha`.
    pub fn rgba(&self, alpha: &str) -> String {
        format!("rgba({}, {alpha})", self.rgb_triplet())
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for AccentColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for AccentColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for AccentColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Darken (negative `percent`) or lighten (positive) a color.
///
/// Each channel is scaled by `(100 + percent) / 100`, truncated toward zero,
/// clamped to `0..=255`, and re-encoded as lowercase `#rrggbb`.
pub fn shade(color: &AccentColor, percent: i32) -> AccentColor {
    let scale = |channel: u8| -> u8 {
        let scaled = i64::from(channel) * i64::from(100 + percent) / 100;
        scaled.clamp(0, 255) as u8
    };
    let (r, g, b) = color.rgb();
    AccentColor::from_rgb(scale(r), scale(g), scale(b))
}

/// Value of the longest leading run of hex digits, or `0` when there is none.
fn leading_hex_value(digits: &str) -> u8 {
    let prefix: String = digits.chars().take_while(char::is_ascii_hexdigit).collect();
    u8::from_str_radix(&prefix, 16).unwrap_or(0)
}
