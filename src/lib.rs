//! attendance-tracker library root.
//! Exposes the CLI parser, the high-level run() function and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Record { action } => cli::commands::record::handle(action, cfg),
        Commands::Config { action } => cli::commands::config::handle(action, cfg),
        Commands::Holiday { action } => cli::commands::holiday::handle(action, cfg),
        Commands::View { action } => cli::commands::view::handle(action, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once; --data-dir wins over the configured directory
    let mut cfg = Config::load(cli.config.as_deref().map(Path::new))?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_directory = dir.clone();
    }

    // logging is best-effort
    let _logger = match logging::init_logging(&cfg.log_level, &cfg.log_dir()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            ui::messages::warning(format!("Logging disabled: {}", e));
            None
        }
    };

    let result = dispatch(&cli, &cfg);
    if let Err(e) = &result {
        log::error!("event=command_failed status=error error={}", e);
    }
    result
}
