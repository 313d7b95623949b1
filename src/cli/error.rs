//! CLI-level errors (wraps listing errors)

use thiserror::Error;

use crate::listing::ListingError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Listing(#[from] ListingError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Listing(e) => match e {
                ListingError::Io { .. } => crate::exitcode::NOINPUT,
                ListingError::Json { .. } => crate::exitcode::DATAERR,
            },
        }
    }
}
