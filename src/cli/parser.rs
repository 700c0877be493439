use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line interface definition for mighty
/// CLI application to keep an Excel timesheet in sync with mite
#[derive(Parser)]
#[command(
    name = "mighty",
    version = env!("CARGO_PKG_VERSION"),
    about = "Keep a local Excel timesheet in sync with your mite time entries",
    long_about = None
)]
pub struct Cli {
    /// Use this config file instead of ./.mighty.yaml or ~/.mighty.yaml
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the timesheet path from the config
    #[arg(global = true, long = "timesheet", value_name = "FILE")]
    pub timesheet: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Push the current month to mite, then pull the recent history back
    Sync {
        /// Timesheet to sync (default: `timesheet` from the config)
        file: Option<String>,

        #[arg(
            long = "only-pull",
            alias = "onlyPull",
            help = "Skip the push phase and only refresh the timesheet from mite"
        )]
        only_pull: bool,
    },

    /// Generate support files
    Gen {
        #[arg(value_enum)]
        target: GenTarget,

        #[arg(long = "force", help = "Overwrite an existing file")]
        force: bool,
    },

    /// Show the configuration in use
    Config {
        #[arg(long = "print", help = "Print the current configuration (token masked)")]
        print_config: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenTarget {
    /// A config file with default values
    Config,
}
