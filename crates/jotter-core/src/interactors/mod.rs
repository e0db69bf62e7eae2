//! One interactor per use case.
//!
//! Every interactor follows the same shape: exactly one local-store call,
//! translation of its result through the envelope, emission of the outcome,
//! and then, only when the outcome carries the operation's exact success
//! message, the remote writes on a detached task. Remote failures are logged
//! and never change an emitted outcome.

mod delete_multiple_notes;
mod delete_note;
mod get_note;
mod get_num_notes;
mod insert_new_note;
mod restore_deleted_note;
mod search_notes;
mod update_note;

pub use delete_multiple_notes::{
    DeleteMultipleNotes, DELETE_NOTES_ERRORS, DELETE_NOTES_SUCCESS, DELETE_NOTES_YOU_MUST_SELECT,
};
pub use delete_note::{DeleteNote, DELETE_NOTE_FAILED, DELETE_NOTE_SUCCESS};
pub use get_note::{GetNote, GET_NOTE_SUCCESS};
pub use get_num_notes::{GetNumNotes, GET_NUM_NOTES_SUCCESS};
pub use insert_new_note::{InsertNewNote, INSERT_NOTE_FAILED, INSERT_NOTE_SUCCESS};
pub use restore_deleted_note::{RestoreDeletedNote, RESTORE_NOTE_FAILED, RESTORE_NOTE_SUCCESS};
pub use search_notes::{SearchNotes, SEARCH_NOTES_NO_MATCHING_RESULTS, SEARCH_NOTES_SUCCESS};
pub use update_note::{UpdateNote, UPDATE_NOTE_FAILED, UPDATE_NOTE_SUCCESS};

use std::future::Future;
use std::sync::Arc;

use crate::envelope::{safe_api_call, safe_cache_call, CallTimeouts, StoreResult};
use crate::error::Result;
use crate::logging::Logger;
use crate::store::{LocalStore, RemoteStore};

/// Stores and call policy shared by every interactor.
#[derive(Clone)]
pub struct StoreHandles {
    pub cache: Arc<dyn LocalStore>,
    pub network: Arc<dyn RemoteStore>,
    pub timeouts: CallTimeouts,
    pub logger: Logger,
}

impl StoreHandles {
    pub fn new(cache: Arc<dyn LocalStore>, network: Arc<dyn RemoteStore>) -> Self {
        Self {
            cache,
            network,
            timeouts: CallTimeouts::default(),
            logger: Logger::default(),
        }
    }

    #[must_use]
    pub const fn with_timeouts(mut self, timeouts: CallTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    #[must_use]
    pub const fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Local-store call under the cache timeout
    pub async fn cache_call<T, F>(&self, call: F) -> StoreResult<T>
    where
        F: Future<Output = Result<T>>,
    {
        safe_cache_call(self.timeouts.cache, call).await
    }

    /// Remote-store call under the network timeout
    pub async fn network_call<T, F>(&self, call: F) -> StoreResult<T>
    where
        F: Future<Output = Result<T>>,
    {
        safe_api_call(self.timeouts.network, call).await
    }

    /// One best-effort remote write; a failure is logged and reported as `false`
    pub(crate) async fn propagate<F>(&self, component: &str, operation: &str, call: F) -> bool
    where
        F: Future<Output = Result<()>>,
    {
        match self.network_call(call).await {
            StoreResult::Success(_) => {
                self.logger
                    .debug(component, &format!("remote {operation} succeeded"));
                true
            }
            StoreResult::GenericError(reason) => {
                self.logger.remote_failure(component, operation, &reason);
                false
            }
        }
    }
}

impl std::fmt::Debug for StoreHandles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreHandles")
            .field("timeouts", &self.timeouts)
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}
