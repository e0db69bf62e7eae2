use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] jotter_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No note title provided")]
    EmptyTitle,
    #[error("Note ID cannot be empty")]
    EmptyNoteId,
    #[error("Nothing to change: pass --title and/or --body")]
    NothingToEdit,
    #[error("No deleted note with id {0} in the remote store")]
    TombstoneNotFound(String),
    #[error("{0}")]
    Rejected(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
