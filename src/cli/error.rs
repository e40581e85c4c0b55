//! CLI-level errors (top of the error chain)

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::DomainError;
use crate::loader::LoadError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid people listing {path}: {source}")]
    Listing {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Load(e) => match e {
                LoadError::Http { .. } | LoadError::Transport(_) => crate::exitcode::UNAVAILABLE,
                LoadError::Parse(_) => crate::exitcode::DATAERR,
                LoadError::Io { .. } => crate::exitcode::NOINPUT,
            },
            CliError::Domain(_) | CliError::Listing { .. } => crate::exitcode::DATAERR,
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Internal(_) => crate::exitcode::SOFTWARE,
        }
    }
}
