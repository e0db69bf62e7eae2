//! Replace a note's title and body locally, then upsert the result remotely.

use super::StoreHandles;
use crate::envelope::handle_cache_result;
use crate::models::{Note, Timestamp};
use crate::state::{Emission, MessageKind, Outcome, StateEvent};

pub const UPDATE_NOTE_SUCCESS: &str = "Successfully updated note.";
pub const UPDATE_NOTE_FAILED: &str = "Failed to update note.";

const COMPONENT: &str = "UpdateNote";

pub struct UpdateNote {
    handles: StoreHandles,
}

impl UpdateNote {
    pub const fn new(handles: StoreHandles) -> Self {
        Self { handles }
    }

    /// `note` carries the id to update and the new title and body.
    ///
    /// One `updated_at` is stamped here and written to both the cache and
    /// the remote copy.
    pub async fn update_note(&self, note: &Note, event: StateEvent) -> Emission<()> {
        let now = Timestamp::now();
        let cache_result = self
            .handles
            .cache_call(
                self.handles
                    .cache
                    .update(&note.id, &note.title, &note.body, Some(now)),
            )
            .await;
        let outcome = handle_cache_result(cache_result, &event, |rows| on_updated(&event, rows));

        self.handles.logger.debug(
            COMPONENT,
            &format!("{event} {} -> {}", note.id, outcome.message.replace('\n', " ")),
        );

        if !outcome.has_message(UPDATE_NOTE_SUCCESS) {
            return Emission::local(outcome);
        }

        let stamped = Note {
            updated_at: now,
            ..note.clone()
        };
        let handles = self.handles.clone();
        Emission::propagate(outcome, async move {
            handles
                .propagate(COMPONENT, "upsert", handles.network.upsert(&stamped))
                .await;
        })
    }
}

fn on_updated(event: &StateEvent, rows: i64) -> Outcome<()> {
    if rows > 0 {
        Outcome::data(event, UPDATE_NOTE_SUCCESS, MessageKind::Success, None)
    } else {
        Outcome::data(event, UPDATE_NOTE_FAILED, MessageKind::Error, None)
    }
}
