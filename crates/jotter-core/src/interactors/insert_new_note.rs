//! Create a note locally, then mirror it to the remote live set.

use super::StoreHandles;
use crate::envelope::handle_cache_result;
use crate::models::{Note, NoteFactory, NoteId};
use crate::state::{Emission, MessageKind, Outcome, StateEvent};

pub const INSERT_NOTE_SUCCESS: &str = "Successfully inserted new note.";
pub const INSERT_NOTE_FAILED: &str = "Failed to insert new note.";

const COMPONENT: &str = "InsertNewNote";

pub struct InsertNewNote {
    handles: StoreHandles,
    factory: NoteFactory,
}

impl InsertNewNote {
    pub const fn new(handles: StoreHandles, factory: NoteFactory) -> Self {
        Self { handles, factory }
    }

    /// Insert a note titled `title` with an empty body.
    ///
    /// A fresh id is generated when `id` is `None`. On success the payload is
    /// the note exactly as written to the cache.
    pub async fn insert_new_note(
        &self,
        id: Option<NoteId>,
        title: &str,
        event: StateEvent,
    ) -> Emission<Note> {
        let new_note = self.factory.create_single_note(id, title, "");

        let cache_result = self
            .handles
            .cache_call(self.handles.cache.insert(&new_note))
            .await;
        let outcome = handle_cache_result(cache_result, &event, |row_id| {
            on_inserted(&event, new_note.clone(), row_id)
        });

        self.handles.logger.debug(
            COMPONENT,
            &format!("{event} -> {}", outcome.message.replace('\n', " ")),
        );

        if !outcome.has_message(INSERT_NOTE_SUCCESS) {
            return Emission::local(outcome);
        }

        let handles = self.handles.clone();
        Emission::propagate(outcome, async move {
            handles
                .propagate(COMPONENT, "upsert", handles.network.upsert(&new_note))
                .await;
        })
    }
}

fn on_inserted(event: &StateEvent, note: Note, row_id: i64) -> Outcome<Note> {
    if row_id > 0 {
        Outcome::data(event, INSERT_NOTE_SUCCESS, MessageKind::Success, Some(note))
    } else {
        Outcome::data(event, INSERT_NOTE_FAILED, MessageKind::Error, None)
    }
}
