//! Subcommand handlers used by the CLI.

/// `tarvix init` helpers.
pub(crate) mod init;
/// `tarvix contact` and `tarvix nav` helpers.
pub(crate) mod page;
/// `tarvix render`, `projects` and `categories` helpers.
pub(crate) mod site;
/// `tarvix palette`, `theme` and `accent` helpers.
pub(crate) mod theme;
