//! CLI-level errors (wraps launch errors)

use thiserror::Error;

use crate::errors::LaunchError;

/// CLI errors are the top-level error type.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Launch(#[from] LaunchError),

    /// Missing subcommand or missing `cdexec` arguments
    #[error("usage")]
    Usage,
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage => crate::exitcode::USAGE,
            CliError::Launch(_) => crate::exitcode::OSERR,
        }
    }
}
