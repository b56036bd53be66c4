//! CLI-level errors (wraps calculator errors)

use thiserror::Error;

use crate::errors::CalcError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Calc(#[from] CalcError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Calc(_) => crate::exitcode::DATAERR,
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
        }
    }
}
