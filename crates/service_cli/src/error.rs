//! Error types for the `recur` command.

use std::path::PathBuf;

use recur_core::types::DateError;
use recur_models::recurrence::RecurrenceError;
use thiserror::Error;

use crate::config::ConfigError;

/// Top-level CLI error.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A rule file could not be parsed into a valid rule.
    #[error("Invalid rule file {path}: {message}")]
    RuleFile {
        /// Rule file path
        path: PathBuf,
        /// Parser or validation message
        message: String,
    },

    /// A date argument was malformed.
    #[error(transparent)]
    Date(#[from] DateError),

    /// The recurrence engine rejected the request.
    #[error(transparent)]
    Recurrence(#[from] RecurrenceError),

    /// JSON output could not be produced.
    #[error("Failed to serialise output: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Output could not be written.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
