//! Unified application error type.
//! All modules (models, timesheet, remote, core, cli) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Format errors (malformed scalar values)
    // ---------------------------
    #[error("Invalid date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid duration: '{0}' (expected HH:MM:SS in whole minutes)")]
    InvalidDuration(String),

    #[error("Invalid billable flag: '{0}' (expected true/false)")]
    InvalidFlag(String),

    #[error("Invalid identifier: '{0}'")]
    InvalidId(String),

    #[error("Invalid history window: '{0}' (examples: 4w, 14d, 2weeks)")]
    InvalidWindow(String),

    #[error("Cell '{sheet}'!{cell}: {source}")]
    Cell {
        sheet: String,
        cell: String,
        #[source]
        source: Box<AppError>,
    },

    // ---------------------------
    // Lookup errors (non-fatal during decode)
    // ---------------------------
    #[error("Unable to look up id for {table} '{name}'")]
    UnknownName { table: &'static str, name: String },

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error(
        "Entry of {date} has no project id or service id (project '{project}', service '{service}'), push aborted"
    )]
    MissingReference {
        date: String,
        project: String,
        service: String,
    },

    // ---------------------------
    // Remote store errors
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote store answered {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    #[error("Remote store error: {0}")]
    Remote(String),

    // ---------------------------
    // Document persistence errors
    // ---------------------------
    #[error("Spreadsheet write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Spreadsheet read error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Timesheet not found: {0} (run 'mighty sync --only-pull' first)")]
    DocumentNotFound(PathBuf),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unable to read the config {0}: {1}\nuse 'mighty gen config' to create a config file")]
    ConfigLoad(PathBuf, String),

    #[error("Config file already exists: {0} (use --force to overwrite)")]
    ConfigExists(PathBuf),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Coarse classification, used by callers that need to decide how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Format,
    Lookup,
    Validation,
    Remote,
    Persistence,
    Config,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Io(_) => ErrorKind::Io,
            AppError::InvalidDate(_)
            | AppError::InvalidDuration(_)
            | AppError::InvalidFlag(_)
            | AppError::InvalidId(_)
            | AppError::InvalidWindow(_)
            | AppError::Cell { .. } => ErrorKind::Format,
            AppError::UnknownName { .. } => ErrorKind::Lookup,
            AppError::MissingReference { .. } => ErrorKind::Validation,
            AppError::Http(_) | AppError::RemoteStatus { .. } | AppError::Remote(_) => {
                ErrorKind::Remote
            }
            AppError::Xlsx(_) | AppError::Spreadsheet(_) | AppError::DocumentNotFound(_) => {
                ErrorKind::Persistence
            }
            AppError::Config(_)
            | AppError::ConfigLoad(..)
            | AppError::ConfigExists(_)
            | AppError::Yaml(_) => ErrorKind::Config,
        }
    }

    /// Attach the sheet/cell address to a format error.
    pub fn at_cell(self, sheet: &str, cell: String) -> Self {
        AppError::Cell {
            sheet: sheet.to_string(),
            cell,
            source: Box::new(self),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
