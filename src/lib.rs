//! Tarvix: theme palettes, content fragments and project filtering for the
//! Tarvix marketing site.
//!
//! The crate derives the full set of CSS display variables from a theme mode
//! and an accent color, indexes project records by category tag, and renders
//! the site's content bundle into HTML fragments.
//!
//! # Quick start
//!
//! ```no_run
//! use tarvix::appearance::Appearance;
//! use tarvix::palette::ThemeMode;
//! use tarvix::prefs::MemoryPreferenceStore;
//! use tarvix::render::css::render_root_block;
//!
//! let store = MemoryPreferenceStore::new();
//! let appearance = Appearance::resolve(&store, ThemeMode::Dark).unwrap();
//! println!("{}", render_root_block(&appearance.palette()));
//! ```

pub mod appearance;
pub mod build_info;
pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod logging;
pub mod nav;
pub mod palette;
pub mod prefs;
pub mod projects;
pub mod render;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
