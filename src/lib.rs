//! eldgraph library root.
//! Exposes the CLI parser, the high-level run() function and the chart
//! building blocks (classifier, normalizer, aggregator, path builder, grid).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod input;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::messages::warning;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Render { .. } => cli::commands::render::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Remarks { .. } => cli::commands::remarks::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let path = Config::resolve_path(cli.config.as_deref());

    // `init --force` and `config --edit` must still work on a broken file
    let cfg = match Config::load(&path) {
        Ok(cfg) => cfg,
        Err(e)
            if matches!(
                cli.command,
                Commands::Init { .. } | Commands::Config { edit_config: true, .. }
            ) =>
        {
            warning(format!("Ignoring invalid configuration ({e}); using defaults."));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    logging::init(cli.verbose, &cfg.log_level);
    tracing::debug!(config = %path.display(), "configuration loaded");

    dispatch(&cli, &cfg)
}
