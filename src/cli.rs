//! CLI argument parsing via clap.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use tarvix::nav::{parse_section_box, SectionBox};
use tarvix::palette::{AccentColor, ThemeMode};
use tarvix::render::Section;

/// Theme palettes, section fragments and project filtering for the Tarvix site.
#[derive(Debug, Parser)]
#[command(
    name = "tarvix",
    version,
    long_version = tarvix::build_info::LONG_VERSION,
    after_help = tarvix::build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    /// Path to config file (default: ./tarvix.toml or ~/.config/tarvix/tarvix.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Content bundle location (file path or http(s) URL). Overrides config.
    #[arg(short = 'd', long = "data", global = true)]
    pub data: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the derived palette for the current or a given appearance.
    Palette {
        #[arg(long, value_enum, default_value_t = PaletteFormat::Css)]
        format: PaletteFormat,
        /// Derive for this mode instead of the stored one.
        #[arg(long)]
        mode: Option<ThemeMode>,
        /// Derive for this accent instead of the stored one.
        #[arg(long)]
        accent: Option<AccentColor>,
    },
    /// Show, toggle or set the theme mode.
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },
    /// Set and persist the accent color.
    Accent {
        /// Color in `#RRGGBB` form.
        color: AccentColor,
    },
    /// Render section fragments and the palette stylesheet.
    Render {
        /// Render a single section to stdout.
        #[arg(long)]
        section: Option<Section>,
        /// Write every section, the detail modals and `palette.css` to this directory.
        #[arg(long, conflicts_with = "section")]
        out: Option<String>,
    },
    /// List projects matching a category filter.
    Projects {
        #[arg(long, default_value = tarvix::projects::ALL_FILTER)]
        filter: String,
    },
    /// List the distinct project categories.
    Categories,
    /// Validate and submit the contact form.
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Compute scroll-spy state for a page layout.
    Nav {
        /// Current vertical scroll offset.
        #[arg(long, default_value_t = 0)]
        scroll: u32,
        /// Viewport height.
        #[arg(long)]
        viewport: u32,
        /// Total document height.
        #[arg(long)]
        document: u32,
        /// Section box as `id:top:height`; repeat in page order.
        #[arg(long = "section", value_parser = parse_section_box, required = true)]
        sections: Vec<SectionBox>,
    },
    /// Write the default config to ~/.config/tarvix/tarvix.toml.
    Init {
        /// Overwrite an existing config after backing it up.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaletteFormat {
    Css,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Toggle,
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn palette_parses_mode_and_accent() {
        let args = Args::parse_from([
            "tarvix", "palette", "--format", "json", "--mode", "light", "--accent", "#0078D4",
        ]);
        let Command::Palette {
            format,
            mode,
            accent,
        } = args.command
        else {
            panic!("expected palette command");
        };
        assert_eq!(format, PaletteFormat::Json);
        assert_eq!(mode, Some(ThemeMode::Light));
        assert_eq!(accent.map(|a| a.to_hex()), Some("#0078d4".to_string()));
    }

    #[test]
    fn accent_rejects_malformed_color() {
        assert!(Args::try_parse_from(["tarvix", "accent", "blue"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let args = Args::parse_from(["tarvix", "categories", "--no-color", "-vv", "--data", "x.json"]);
        assert!(args.no_color);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.data.as_deref(), Some("x.json"));
        assert!(matches!(args.command, Command::Categories));
    }

    #[test]
    fn nav_collects_repeated_sections() {
        let args = Args::parse_from([
            "tarvix", "nav", "--scroll", "450", "--viewport", "800", "--document", "3000",
            "--section", "home:0:500", "--section", "about:500:700",
        ]);
        let Command::Nav { sections, scroll, .. } = args.command else {
            panic!("expected nav command");
        };
        assert_eq!(scroll, 450);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1], SectionBox::new("about", 500, 700));
    }

    #[test]
    fn render_section_and_out_conflict() {
        assert!(
            Args::try_parse_from(["tarvix", "render", "--section", "team", "--out", "dist"]).is_err()
        );
    }

    #[test]
    fn projects_filter_defaults_to_all() {
        let args = Args::parse_from(["tarvix", "projects"]);
        let Command::Projects { filter } = args.command else {
            panic!("expected projects command");
        };
        assert_eq!(filter, "all");
    }
}
