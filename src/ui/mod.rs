//! Terminal status output for the CLI.
//!
//! Status, warnings, and errors go to stderr; command payloads (CSS, HTML,
//! JSON) are printed to stdout by the caller so they can be piped.

use crossterm::style::{Color, Stylize};

use crate::palette::{AccentColor, PaletteVariableSet};

pub const INDENT_1: &str = "  ";
pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";
pub const GLYPH_SECTION_BULLET: &str = "•";
pub const GLYPH_SWATCH: &str = "██";

const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
const COLOR_SECTION_TITLE: Color = Color::Cyan;
const COLOR_FIELD_KEY: Color = Color::DarkGrey;
const COLOR_FIELD_VALUE: Color = Color::White;
const COLOR_WARNING: Color = Color::Yellow;
const COLOR_ERROR: Color = Color::Red;

/// Stderr status renderer.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print a small section header in status-style output.
    pub fn section(&self, title: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                GLYPH_SECTION_BULLET.with(COLOR_SECTION_BULLET),
                title.with(COLOR_SECTION_TITLE).bold()
            );
        } else {
            eprintln!("{title}:");
        }
    }

    /// Print one key/value row.
    pub fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{INDENT_1}{} {}",
                format!("{key}:").with(COLOR_FIELD_KEY),
                value.with(COLOR_FIELD_VALUE),
            );
        } else {
            eprintln!("{INDENT_1}{key}: {value}");
        }
    }

    /// Print a simple indented detail line.
    pub fn detail(&self, text: &str) {
        eprintln!("{INDENT_1}{text}");
    }

    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(COLOR_WARNING).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(COLOR_ERROR).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }

    /// Print every palette entry, with a color swatch for plain hex values.
    pub fn palette(&self, palette: &PaletteVariableSet) {
        for (key, value) in palette.iter() {
            match swatch_color(value).filter(|_| self.color) {
                Some(color) => eprintln!(
                    "{INDENT_1}{} {} {}",
                    GLYPH_SWATCH.with(color),
                    format!("--{key}:").with(COLOR_FIELD_KEY),
                    value.with(COLOR_FIELD_VALUE),
                ),
                None => self.field(&format!("--{key}"), value),
            }
        }
    }
}

/// Terminal color for a `#rrggbb` palette value.
pub fn swatch_color(value: &str) -> Option<Color> {
    let (r, g, b) = AccentColor::parse(value).ok()?.rgb();
    Some(Color::Rgb { r, g, b })
}
