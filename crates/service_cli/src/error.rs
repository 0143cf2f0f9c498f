//! CLI error type.

use payoff_core::SamplerError;
use pool_registry::PoolError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `earn` commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Sampler(#[from] SamplerError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
