//! Remote store persisted as one JSON document (e.g. on a shared folder)

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{ensure_batch_limit, RemoteSnapshot, RemoteStore};
use crate::error::Result;
use crate::models::{Note, NoteId};

/// `RemoteStore` whose collections are rewritten to disk after every mutation.
pub struct JsonFileRemoteStore {
    path: PathBuf,
    state: Mutex<RemoteSnapshot>,
}

impl JsonFileRemoteStore {
    /// Open the document at `path`; a missing file starts empty
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let snapshot = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                RemoteSnapshot::default()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            RemoteSnapshot::default()
        };

        tracing::debug!(
            "Opened file remote at {} ({} live, {} deleted)",
            path.display(),
            snapshot.notes.len(),
            snapshot.deletes.len()
        );

        Ok(Self {
            path,
            state: Mutex::new(snapshot),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` and persist; the in-memory copy only advances if the write lands
    async fn mutate<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut RemoteSnapshot) -> Result<()> + Send,
    {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        change(&mut next)?;
        write_snapshot(&self.path, &next).await?;
        *state = next;
        Ok(())
    }
}

async fn write_snapshot(path: &Path, snapshot: &RemoteSnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let serialized = serde_json::to_string_pretty(snapshot)?;
    let staging = path.with_extension("json.tmp");
    tokio::fs::write(&staging, serialized).await?;
    tokio::fs::rename(&staging, path).await?;
    Ok(())
}

#[async_trait]
impl RemoteStore for JsonFileRemoteStore {
    async fn upsert(&self, note: &Note) -> Result<()> {
        self.mutate(|state| {
            state.notes.insert(note.id.clone(), note.clone());
            Ok(())
        })
        .await
    }

    async fn upsert_many(&self, notes: &[Note]) -> Result<()> {
        ensure_batch_limit(notes.len())?;
        self.mutate(|state| state.upsert_all(notes)).await
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        self.mutate(|state| {
            state.notes.remove(id);
            Ok(())
        })
        .await
    }

    async fn insert_tombstone(&self, note: &Note) -> Result<()> {
        self.mutate(|state| {
            state.deletes.insert(note.id.clone(), note.clone());
            Ok(())
        })
        .await
    }

    async fn insert_tombstones(&self, notes: &[Note]) -> Result<()> {
        ensure_batch_limit(notes.len())?;
        self.mutate(|state| state.tombstone_all(notes)).await
    }

    async fn delete_tombstone(&self, note: &Note) -> Result<()> {
        self.mutate(|state| {
            state.deletes.remove(&note.id);
            Ok(())
        })
        .await
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
        self.mutate(|state| {
            *state = RemoteSnapshot::default();
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteFactory;
    use crate::store::REMOTE_BATCH_LIMIT;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_survive_reopen() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("remote").join("notes.json");
        let notes = NoteFactory::new().create_note_list(2);

        {
            let store = JsonFileRemoteStore::open(&path).unwrap();
            store.upsert(&notes[0]).await.unwrap();
            store.insert_tombstone(&notes[1]).await.unwrap();
        }

        let reopened = JsonFileRemoteStore::open(&path).unwrap();
        assert_eq!(reopened.get_live().await.unwrap(), vec![notes[0].clone()]);
        assert_eq!(
            reopened.get_tombstones().await.unwrap(),
            vec![notes[1].clone()]
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_writers_all_land_on_disk() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("notes.json");
        let store = std::sync::Arc::new(JsonFileRemoteStore::open(&path).unwrap());
        let notes = NoteFactory::new().create_note_list(20);

        let writers: Vec<_> = notes
            .iter()
            .cloned()
            .map(|note| {
                let store = store.clone();
                tokio::spawn(async move { store.upsert(&note).await })
            })
            .collect();
        for writer in writers {
            writer.await.unwrap().unwrap();
        }

        let reopened = JsonFileRemoteStore::open(&path).unwrap();
        assert_eq!(reopened.get_live().await.unwrap().len(), notes.len());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn rejected_batch_leaves_file_untouched() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("notes.json");
        let store = JsonFileRemoteStore::open(&path).unwrap();

        let notes = NoteFactory::new().create_note_list(REMOTE_BATCH_LIMIT + 1);
        assert!(store.upsert_many(&notes).await.is_err());
        assert!(!path.exists());
        assert!(store.get_live().await.unwrap().is_empty());
    }
}
