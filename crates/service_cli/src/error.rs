//! CLI error types.

use thiserror::Error;

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file named on the command line does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// An argument value was not understood.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration file failed to parse.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The generator rejected its configuration.
    #[error(transparent)]
    Generator(#[from] orders_core::types::GeneratorError),

    /// Writing the output dataset failed.
    #[error(transparent)]
    Sink(#[from] orders_sink::SinkError),

    /// An underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
