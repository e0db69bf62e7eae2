//! Delete a selection of notes, collapsing per-note results into one outcome.

use super::delete_note::{delete_cached, DELETE_NOTE_SUCCESS};
use super::StoreHandles;
use crate::models::Note;
use crate::state::{Emission, EventKind, MessageKind, Outcome, StateEvent};

pub const DELETE_NOTES_SUCCESS: &str = "Successfully deleted notes.";
pub const DELETE_NOTES_ERRORS: &str =
    "Not all the notes you selected were deleted. There was some errors.";
pub const DELETE_NOTES_YOU_MUST_SELECT: &str = "You haven't selected any notes to delete.";

const COMPONENT: &str = "DeleteMultipleNotes";

pub struct DeleteMultipleNotes {
    handles: StoreHandles,
}

impl DeleteMultipleNotes {
    pub const fn new(handles: StoreHandles) -> Self {
        Self { handles }
    }

    /// Delete each note in `notes` with its own local call.
    ///
    /// Exactly one outcome is emitted. Only notes whose local delete succeeded
    /// are removed remotely and tombstoned, one note at a time, each remote
    /// call independent of the others.
    pub async fn delete_notes(&self, notes: &[Note], event: StateEvent) -> Emission<()> {
        if notes.is_empty() {
            return Emission::local(Outcome::data(
                &event,
                DELETE_NOTES_YOU_MUST_SELECT,
                MessageKind::Info,
                None,
            ));
        }

        let mut deleted = Vec::with_capacity(notes.len());
        let mut had_errors = false;
        for note in notes {
            let item_event =
                StateEvent::with_request_id(EventKind::DeleteNote, event.request_id());
            let item = delete_cached(&self.handles, note, &item_event).await;
            if item.has_message(DELETE_NOTE_SUCCESS) {
                deleted.push(note.clone());
            } else {
                had_errors = true;
                self.handles.logger.debug(
                    COMPONENT,
                    &format!("{} not deleted: {}", note.id, item.message.replace('\n', " ")),
                );
            }
        }

        let outcome = if had_errors {
            Outcome::data(&event, DELETE_NOTES_ERRORS, MessageKind::Error, None)
        } else {
            Outcome::data(&event, DELETE_NOTES_SUCCESS, MessageKind::Success, None)
        };
        self.handles.logger.info(
            COMPONENT,
            &format!("{event}: deleted {} of {}", deleted.len(), notes.len()),
        );

        if deleted.is_empty() {
            return Emission::local(outcome);
        }

        let handles = self.handles.clone();
        Emission::propagate(outcome, async move {
            for note in &deleted {
                handles
                    .propagate(COMPONENT, "delete", handles.network.delete(&note.id))
                    .await;
                handles
                    .propagate(
                        COMPONENT,
                        "insert tombstone",
                        handles.network.insert_tombstone(note),
                    )
                    .await;
            }
        })
    }
}
