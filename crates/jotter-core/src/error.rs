//! Error types for jotter-core

use thiserror::Error;

/// Result type alias using jotter-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jotter-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport error talking to the remote store
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote store answered with an error status
    #[error("Remote API error: {0}")]
    Api(String),

    /// A remote batch exceeded the provider limit; nothing was written
    #[error("Cannot write more than {limit} notes in one batch (got {actual})")]
    BatchTooLarge { limit: usize, actual: usize },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
