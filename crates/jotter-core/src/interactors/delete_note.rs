//! Delete one note locally; remotely, tombstone it and drop the live copy.

use super::StoreHandles;
use crate::envelope::handle_cache_result;
use crate::models::Note;
use crate::state::{Emission, MessageKind, Outcome, StateEvent};

pub const DELETE_NOTE_SUCCESS: &str = "Successfully deleted note.";
pub const DELETE_NOTE_FAILED: &str = "Failed to delete note.";

const COMPONENT: &str = "DeleteNote";

pub struct DeleteNote {
    handles: StoreHandles,
}

impl DeleteNote {
    pub const fn new(handles: StoreHandles) -> Self {
        Self { handles }
    }

    /// Remote writes happen in order: the live delete, then the tombstone.
    /// A failed live delete does not stop the tombstone write.
    pub async fn delete_note(&self, note: &Note, event: StateEvent) -> Emission<()> {
        let outcome = delete_cached(&self.handles, note, &event).await;

        self.handles.logger.debug(
            COMPONENT,
            &format!("{event} {} -> {}", note.id, outcome.message.replace('\n', " ")),
        );

        if !outcome.has_message(DELETE_NOTE_SUCCESS) {
            return Emission::local(outcome);
        }

        let handles = self.handles.clone();
        let note = note.clone();
        Emission::propagate(outcome, async move {
            handles
                .propagate(COMPONENT, "delete", handles.network.delete(&note.id))
                .await;
            handles
                .propagate(
                    COMPONENT,
                    "insert tombstone",
                    handles.network.insert_tombstone(&note),
                )
                .await;
        })
    }
}

/// Local half of a delete, shared with the batch delete
pub(super) async fn delete_cached(
    handles: &StoreHandles,
    note: &Note,
    event: &StateEvent,
) -> Outcome<()> {
    let cache_result = handles.cache_call(handles.cache.delete(&note.id)).await;
    handle_cache_result(cache_result, event, |rows| on_deleted(event, rows))
}

fn on_deleted(event: &StateEvent, rows: i64) -> Outcome<()> {
    if rows > 0 {
        Outcome::data(event, DELETE_NOTE_SUCCESS, MessageKind::Success, None)
    } else {
        Outcome::data(event, DELETE_NOTE_FAILED, MessageKind::Error, None)
    }
}
