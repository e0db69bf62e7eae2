//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::Timestamp;
use crate::error::Error;

/// An opaque, immutable note identifier.
///
/// Freshly generated ids are UUID v7 (time-sortable), but ids received from
/// the remote store are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NoteId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput("note id cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// A note in the system.
///
/// Equality is structural over every field; reconciliation and the tests
/// rely on it to detect that two copies have not diverged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Title line
    pub title: String,
    /// Body text
    pub body: String,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Creation timestamp
    pub created_at: Timestamp,
}

impl Note {
    /// Get the title truncated to `max_len` characters
    #[must_use]
    pub fn title_preview(&self, max_len: usize) -> String {
        self.title.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Note {
        let ts = Timestamp::parse("2024-01-05 10:00:00 AM").unwrap();
        Note {
            id: "note-1".parse().unwrap(),
            title: "Groceries".to_string(),
            body: "eggs, milk".to_string(),
            updated_at: ts,
            created_at: ts,
        }
    }

    #[test]
    fn test_note_id_unique() {
        let id1 = NoteId::new();
        let id2 = NoteId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_note_id_rejects_blank() {
        assert!("   ".parse::<NoteId>().is_err());
        assert_eq!("abc".parse::<NoteId>().unwrap().as_str(), "abc");
    }

    #[test]
    fn test_equality_is_structural() {
        let a = sample();
        let mut b = sample();
        assert_eq!(a, b);

        b.updated_at = Timestamp::parse("2024-01-05 10:00:01 AM").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_serializes_timestamps_as_strings() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["updated_at"], "2024-01-05 10:00:00 AM");
        assert_eq!(json["id"], "note-1");
    }

    #[test]
    fn test_title_preview() {
        let note = sample();
        assert_eq!(note.title_preview(4), "Groc");
    }
}
