//! Error types for the CLI

use sim_types::SimError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Simulator rejected the operation
    #[error("simulator error: {0}")]
    Sim(#[from] SimError),

    /// Command could not be parsed
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Command argument was invalid
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// File I/O error
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    /// REPL error
    #[error("REPL error: {0}")]
    Repl(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
