//! Note construction

use super::{Note, NoteId, Timestamp};

/// Builds notes with normalized fields and consistent timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoteFactory;

impl NoteFactory {
    pub const fn new() -> Self {
        Self
    }

    /// Create one note, generating an id when none is supplied.
    ///
    /// The title is trimmed; the body is kept verbatim. Both timestamps are
    /// stamped with the same instant.
    #[must_use]
    pub fn create_single_note(&self, id: Option<NoteId>, title: &str, body: &str) -> Note {
        let now = Timestamp::now();
        Note {
            id: id.unwrap_or_default(),
            title: title.trim().to_string(),
            body: body.to_string(),
            updated_at: now,
            created_at: now,
        }
    }

    /// Create `count` placeholder notes with fresh ids
    #[must_use]
    pub fn create_note_list(&self, count: usize) -> Vec<Note> {
        (0..count)
            .map(|index| self.create_single_note(None, &format!("Note {index}"), "placeholder"))
            .collect()
    }
}
