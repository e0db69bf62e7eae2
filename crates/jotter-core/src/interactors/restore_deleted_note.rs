//! Put a previously deleted note back, locally and remotely.

use super::StoreHandles;
use crate::envelope::handle_cache_result;
use crate::models::Note;
use crate::state::{Emission, MessageKind, Outcome, StateEvent};

pub const RESTORE_NOTE_SUCCESS: &str = "Successfully restored the deleted note.";
pub const RESTORE_NOTE_FAILED: &str = "Failed to restore the deleted note.";

const COMPONENT: &str = "RestoreDeletedNote";

pub struct RestoreDeletedNote {
    handles: StoreHandles,
}

impl RestoreDeletedNote {
    pub const fn new(handles: StoreHandles) -> Self {
        Self { handles }
    }

    /// Re-insert `note` as-is. Remotely the live copy is written before the
    /// tombstone is removed.
    pub async fn restore_deleted_note(&self, note: &Note, event: StateEvent) -> Emission<Note> {
        let cache_result = self.handles.cache_call(self.handles.cache.insert(note)).await;
        let outcome = handle_cache_result(cache_result, &event, |row_id| {
            on_restored(&event, note.clone(), row_id)
        });

        self.handles.logger.debug(
            COMPONENT,
            &format!("{event} {} -> {}", note.id, outcome.message.replace('\n', " ")),
        );

        if !outcome.has_message(RESTORE_NOTE_SUCCESS) {
            return Emission::local(outcome);
        }

        let handles = self.handles.clone();
        let note = note.clone();
        Emission::propagate(outcome, async move {
            handles
                .propagate(COMPONENT, "upsert", handles.network.upsert(&note))
                .await;
            handles
                .propagate(
                    COMPONENT,
                    "delete tombstone",
                    handles.network.delete_tombstone(&note),
                )
                .await;
        })
    }
}

fn on_restored(event: &StateEvent, note: Note, row_id: i64) -> Outcome<Note> {
    if row_id > 0 {
        Outcome::data(event, RESTORE_NOTE_SUCCESS, MessageKind::Success, Some(note))
    } else {
        Outcome::data(event, RESTORE_NOTE_FAILED, MessageKind::Error, None)
    }
}
