//! Fetch one note from the local cache by id.

use super::StoreHandles;
use crate::envelope::handle_cache_result;
use crate::models::{Note, NoteId};
use crate::state::{Emission, MessageKind, Outcome, StateEvent};

pub const GET_NOTE_SUCCESS: &str = "Successfully retrieved note.";

pub struct GetNote {
    handles: StoreHandles,
}

impl GetNote {
    pub const fn new(handles: StoreHandles) -> Self {
        Self { handles }
    }

    /// A missing note resolves to the "data is null" error outcome.
    pub async fn get_note(&self, id: &NoteId, event: StateEvent) -> Emission<Note> {
        let cache_result = self
            .handles
            .cache_call(self.handles.cache.get_by_id(id))
            .await
            .flatten();
        let outcome = handle_cache_result(cache_result, &event, |note| {
            Outcome::data(&event, GET_NOTE_SUCCESS, MessageKind::None, Some(note))
        });
        Emission::local(outcome)
    }
}
