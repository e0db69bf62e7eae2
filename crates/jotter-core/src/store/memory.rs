//! In-process remote document store

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::{ensure_batch_limit, RemoteStore};
use crate::error::Result;
use crate::models::{Note, NoteId};

/// Both remote collections, keyed by note id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSnapshot {
    #[serde(default)]
    pub notes: BTreeMap<NoteId, Note>,
    #[serde(default)]
    pub deletes: BTreeMap<NoteId, Note>,
}

impl RemoteSnapshot {
    pub(crate) fn upsert_all(&mut self, notes: &[Note]) -> Result<()> {
        ensure_batch_limit(notes.len())?;
        for note in notes {
            self.notes.insert(note.id.clone(), note.clone());
        }
        Ok(())
    }

    pub(crate) fn tombstone_all(&mut self, notes: &[Note]) -> Result<()> {
        ensure_batch_limit(notes.len())?;
        for note in notes {
            self.deletes.insert(note.id.clone(), note.clone());
        }
        Ok(())
    }
}

/// `RemoteStore` kept entirely in memory.
///
/// Notes are stored exactly as given; nothing is re-stamped on write.
#[derive(Debug, Clone, Default)]
pub struct MemoryRemoteStore {
    state: Arc<Mutex<RemoteSnapshot>>,
}

impl MemoryRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing collections
    pub fn from_snapshot(snapshot: RemoteSnapshot) -> Self {
        Self {
            state: Arc::new(Mutex::new(snapshot)),
        }
    }

    /// Copy of both collections
    pub async fn snapshot(&self) -> RemoteSnapshot {
        self.state.lock().await.clone()
    }
}

#[async_trait]
impl RemoteStore for MemoryRemoteStore {
    async fn upsert(&self, note: &Note) -> Result<()> {
        let mut state = self.state.lock().await;
        state.notes.insert(note.id.clone(), note.clone());
        Ok(())
    }

    async fn upsert_many(&self, notes: &[Note]) -> Result<()> {
        self.state.lock().await.upsert_all(notes)
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        self.state.lock().await.notes.remove(id);
        Ok(())
    }

    async fn insert_tombstone(&self, note: &Note) -> Result<()> {
        let mut state = self.state.lock().await;
        state.deletes.insert(note.id.clone(), note.clone());
        Ok(())
    }

    async fn insert_tombstones(&self, notes: &[Note]) -> Result<()> {
        self.state.lock().await.tombstone_all(notes)
    }

    async fn delete_tombstone(&self, note: &Note) -> Result<()> {
        self.state.lock().await.deletes.remove(&note.id);
        Ok(())
    }

    async fn get_live(&self) -> Result<Vec<Note>> {
        Ok(self.state.lock().await.notes.values().cloned().collect())
    }

    async fn get_tombstones(&self) -> Result<Vec<Note>> {
        Ok(self.state.lock().await.deletes.values().cloned().collect())
    }

    async fn find(&self, note: &Note) -> Result<Option<Note>> {
        Ok(self.state.lock().await.notes.get(&note.id).cloned())
    }

    async fn delete_all(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        state.notes.clear();
        state.deletes.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::NoteFactory;
    use crate::store::REMOTE_BATCH_LIMIT;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn upsert_replaces_by_id() {
        let store = MemoryRemoteStore::new();
        let note = NoteFactory::new().create_single_note(None, "v1", "");
        store.upsert(&note).await.unwrap();

        let edited = Note {
            title: "v2".into(),
            ..note.clone()
        };
        store.upsert(&edited).await.unwrap();

        assert_eq!(store.get_live().await.unwrap(), vec![edited.clone()]);
        assert_eq!(store.find(&note).await.unwrap(), Some(edited));
    }

    #[tokio::test]
    async fn tombstones_are_a_separate_collection() {
        let store = MemoryRemoteStore::new();
        let note = NoteFactory::new().create_single_note(None, "gone", "");
        store.upsert(&note).await.unwrap();
        store.delete(&note.id).await.unwrap();
        store.insert_tombstone(&note).await.unwrap();

        assert!(store.find(&note).await.unwrap().is_none());
        assert_eq!(store.get_tombstones().await.unwrap(), vec![note.clone()]);

        store.delete_tombstone(&note).await.unwrap();
        assert!(store.get_tombstones().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn oversized_batches_write_nothing() {
        let store = MemoryRemoteStore::new();
        let notes = NoteFactory::new().create_note_list(REMOTE_BATCH_LIMIT + 1);

        assert!(matches!(
            store.upsert_many(&notes).await,
            Err(Error::BatchTooLarge { .. })
        ));
        assert!(matches!(
            store.insert_tombstones(&notes).await,
            Err(Error::BatchTooLarge { .. })
        ));
        assert_eq!(store.snapshot().await, RemoteSnapshot::default());

        store
            .upsert_many(&notes[..REMOTE_BATCH_LIMIT])
            .await
            .unwrap();
        assert_eq!(store.get_live().await.unwrap().len(), REMOTE_BATCH_LIMIT);
    }

    #[tokio::test]
    async fn delete_all_clears_both_collections() {
        let store = MemoryRemoteStore::new();
        let notes = NoteFactory::new().create_note_list(3);
        store.upsert_many(&notes).await.unwrap();
        store.insert_tombstones(&notes[..1]).await.unwrap();

        store.delete_all().await.unwrap();
        assert_eq!(store.snapshot().await, RemoteSnapshot::default());
    }
}
