//! CLI-level errors (wraps core errors)

use thiserror::Error;

use crate::errors::{EditError, SeedError};
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Edit(#[from] EditError),

    #[error("{0}")]
    Seed(#[from] SeedError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => exitcode::USAGE,
            CliError::Seed(SeedError::FileRead(_)) => exitcode::NOINPUT,
            CliError::Seed(_) => exitcode::DATAERR,
            CliError::Edit(_) => exitcode::SOFTWARE,
        }
    }
}
