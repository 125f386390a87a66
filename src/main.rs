//! CLI entry point for tarvix.

mod app;
mod cli;

use clap::Parser;

use tarvix::build_info;
use tarvix::config::{load_config, Config};
use tarvix::logging;
use tarvix::ui::Renderer;

use crate::app::CommandContext;
use crate::cli::Command;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    // `init` must work before any config file exists.
    let loaded = if matches!(args.command, Command::Init { .. }) {
        Ok(Config::default())
    } else {
        load_config(args.config.as_deref())
    };
    let mut config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    if let Some(data) = &args.data {
        config.site.data_source = data.clone();
    }
    if args.no_color {
        config.display.color = false;
    }

    logging::init(&config.logging.level, args.verbose, config.display.color);
    tracing::debug!(build = %build_info::metadata_line(), "starting tarvix");

    let renderer = Renderer::new(config.display.color);
    let ctx = CommandContext {
        config: &config,
        config_path: args.config.as_deref(),
        renderer: &renderer,
    };
    if let Err(err) = app::run(args.command, &ctx).await {
        renderer.error(&err.to_string());
        std::process::exit(1);
    }
}
