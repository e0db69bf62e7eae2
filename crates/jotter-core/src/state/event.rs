//! Request events used to correlate outcomes with the calls that produced them

use std::fmt;

use uuid::Uuid;

/// The operation a request event stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    InsertNewNote,
    UpdateNote,
    DeleteNote,
    DeleteMultipleNotes,
    RestoreDeletedNote,
    SearchNotes,
    GetNumNotes,
    GetNote,
    SyncDeletedNotes,
    SyncNotes,
}

impl EventKind {
    /// Context prefix for error outcome messages
    pub const fn error_info(self) -> &'static str {
        match self {
            Self::InsertNewNote => "Error inserting new note.",
            Self::UpdateNote => "Error updating note.",
            Self::DeleteNote => "Error deleting note.",
            Self::DeleteMultipleNotes => "Error deleting the selected notes.",
            Self::RestoreDeletedNote => "Error restoring the deleted note.",
            Self::SearchNotes => "Error getting list of notes.",
            Self::GetNumNotes => "Error getting the number of notes from the cache.",
            Self::GetNote => "Error retrieving note.",
            Self::SyncDeletedNotes => "Error syncing deleted notes.",
            Self::SyncNotes => "Error syncing notes.",
        }
    }

    pub const fn event_name(self) -> &'static str {
        match self {
            Self::InsertNewNote => "InsertNewNoteEvent",
            Self::UpdateNote => "UpdateNoteEvent",
            Self::DeleteNote => "DeleteNoteEvent",
            Self::DeleteMultipleNotes => "DeleteMultipleNotesEvent",
            Self::RestoreDeletedNote => "RestoreDeletedNoteEvent",
            Self::SearchNotes => "SearchNotesEvent",
            Self::GetNumNotes => "GetNumNotesInCacheEvent",
            Self::GetNote => "GetNoteEvent",
            Self::SyncDeletedNotes => "SyncDeletedNotesEvent",
            Self::SyncNotes => "SyncNotesEvent",
        }
    }
}

/// A caller-supplied request token.
///
/// Only used for correlation and logging; interactors never branch on it
/// beyond picking the error context string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEvent {
    kind: EventKind,
    request_id: String,
}

impl StateEvent {
    /// New event with a generated request id
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            request_id: Uuid::now_v7().to_string(),
        }
    }

    /// New event correlated with an id chosen by the caller
    #[must_use]
    pub fn with_request_id(kind: EventKind, request_id: impl Into<String>) -> Self {
        Self {
            kind,
            request_id: request_id.into(),
        }
    }

    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub const fn error_info(&self) -> &'static str {
        self.kind.error_info()
    }

    pub const fn event_name(&self) -> &'static str {
        self.kind.event_name()
    }
}

impl fmt::Display for StateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.event_name(), self.request_id)
    }
}
