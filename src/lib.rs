//! mighty library root.
//! Exposes the CLI parser, the high-level run() function and the sync engine.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod remote;
pub mod timesheet;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        // gen config deve funzionare anche senza un config esistente
        Commands::Gen { .. } => cli::commands::generate::handle(cli),
        Commands::Config { .. } => {
            let (cfg, _) = load_config(cli)?;
            cli::commands::config::handle(&cli.command, &cfg)
        }
        Commands::Sync { .. } => {
            let (cfg, path) = load_config(cli)?;
            // il livello dipende dal config: si logga solo dopo averlo letto
            logging::init(cfg.debug);
            tracing::debug!("Using config file {}", path.display());
            cli::commands::sync::handle(&cli.command, &cfg)
        }
    }
}

fn load_config(cli: &Cli) -> AppResult<(Config, PathBuf)> {
    let path = Config::locate(cli.config.as_deref())?;
    let mut cfg = Config::read(&path)?;
    if let Some(custom) = &cli.timesheet {
        cfg.timesheet = custom.clone();
    }
    Ok((cfg, path))
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}
