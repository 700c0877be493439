use crate::cli::parser::{Cli, Commands, GenTarget};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `gen` subcommand
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Gen { target, force } = &cli.command {
        match target {
            GenTarget::Config => {
                let path = cli.config.clone().unwrap_or_else(Config::default_file);
                Config::generate(&path, *force)?;
                success(format!("Config file created: {}", path.display()));
                info("Put your mite API key in 'token' before running 'mighty sync'.");
            }
        }
    }
    Ok(())
}
