//! CLI-specific error types

use aws_utils::ServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Process exit status for this error.
    ///
    /// Configuration problems (missing profile, bad arguments) exit with 2,
    /// everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::Service(ServiceError::Configuration(_)) => 2,
            _ => 1,
        }
    }
}
