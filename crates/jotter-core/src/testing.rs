//! Store fixtures shared by the interactor and reconciliation tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::interactors::StoreHandles;
use crate::logging::Logger;
use crate::models::{Note, NoteId, Timestamp};
use crate::store::{LocalStore, MemoryRemoteStore, NoteOrder, RemoteStore, SqliteNoteStore};

/// Id that makes the cache fail an insert with a store fault
pub const FORCE_NEW_NOTE_EXCEPTION: &str = "FORCE_NEW_NOTE_EXCEPTION";
/// Id that makes the cache fail an update with a store fault
pub const FORCE_UPDATE_NOTE_EXCEPTION: &str = "FORCE_UPDATE_NOTE_EXCEPTION";
/// Id that makes the cache fail a delete with a store fault
pub const FORCE_DELETE_NOTE_EXCEPTION: &str = "FORCE_DELETE_NOTE_EXCEPTION";
/// Query that makes the cache fail a search with a store fault
pub const FORCE_SEARCH_NOTES_EXCEPTION: &str = "FORCE_SEARCH_NOTES_EXCEPTION";
/// Id for which every cache mutation reports zero affected rows
pub const FORCE_GENERAL_FAILURE: &str = "FORCE_GENERAL_FAILURE";

const SEED: &[(&str, &str, &str)] = &[
    ("Vancouver PNE", "Ride the wooden coaster", "2024-01-01 09:00:00 AM"),
    ("Grocery run", "eggs, milk, rice", "2024-01-02 10:30:00 AM"),
    ("Book club", "Finish chapter 7", "2024-01-03 07:15:00 PM"),
    ("Gym", "Legs day", "2024-01-04 06:00:00 AM"),
    ("Dentist", "Tuesday 3pm", "2024-01-05 11:45:00 AM"),
    ("Recipe: pho", "Char the onions first", "2024-01-06 08:20:00 PM"),
    ("Car service", "Oil and tires", "2024-01-07 01:00:00 PM"),
    ("Gift ideas", "Headphones, a plant", "2024-01-08 04:40:00 PM"),
    ("Taxes", "Collect receipts", "2024-01-09 09:10:00 AM"),
    ("Trip packing list", "Passport, charger", "2024-01-10 12:00:00 PM"),
];

fn seed_notes() -> Vec<Note> {
    SEED.iter()
        .map(|(title, body, stamp)| {
            let at: Timestamp = stamp.parse().expect("seed timestamp");
            Note {
                id: NoteId::new(),
                title: (*title).to_string(),
                body: (*body).to_string(),
                updated_at: at,
                created_at: at,
            }
        })
        .collect()
}

/// Remote write that [`TestStores::rejecting`] can make fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOp {
    Upsert,
    Delete,
    InsertTombstone,
    DeleteTombstone,
}

#[derive(Debug, Clone)]
enum RemoteMode {
    Reachable,
    Unreachable,
    Rejecting { op: RemoteOp, ids: Vec<NoteId> },
}

/// A cache and a remote store, plus handles that inject faults on demand.
pub struct TestStores {
    pub cache: SqliteNoteStore,
    pub remote: MemoryRemoteStore,
    remote_mode: RemoteMode,
}

impl TestStores {
    pub async fn empty() -> Self {
        Self {
            cache: SqliteNoteStore::open_in_memory().expect("in-memory cache"),
            remote: MemoryRemoteStore::new(),
            remote_mode: RemoteMode::Reachable,
        }
    }

    /// Both stores hold the same ten notes
    pub async fn seeded() -> Self {
        let stores = Self::empty().await;
        let notes = seed_notes();
        stores.cache.insert_many(&notes).await.expect("seed cache");
        stores.remote.upsert_many(&notes).await.expect("seed remote");
        stores
    }

    /// Seeded, but every remote call through [`Self::handles`] fails
    pub async fn seeded_with_failing_remote() -> Self {
        Self {
            remote_mode: RemoteMode::Unreachable,
            ..Self::seeded().await
        }
    }

    /// Through [`Self::handles`], `op` fails for the notes in `ids`; every
    /// other remote call reaches `remote`
    pub fn rejecting(self, op: RemoteOp, ids: &[NoteId]) -> Self {
        Self {
            remote_mode: RemoteMode::Rejecting {
                op,
                ids: ids.to_vec(),
            },
            ..self
        }
    }

    pub fn handles(&self) -> StoreHandles {
        let network: Arc<dyn RemoteStore> = match &self.remote_mode {
            RemoteMode::Reachable => Arc::new(self.remote.clone()),
            RemoteMode::Unreachable => Arc::new(UnreachableRemoteStore),
            RemoteMode::Rejecting { op, ids } => Arc::new(SelectiveRemoteStore {
                inner: self.remote.clone(),
                op: *op,
                ids: ids.clone(),
            }),
        };
        StoreHandles::new(Arc::new(FaultyLocalStore(self.cache.clone())), network)
            .with_logger(Logger::disabled())
    }

    pub async fn cache_count(&self) -> i64 {
        self.cache.count().await.expect("count")
    }

    pub async fn cached(&self, id: &NoteId) -> Option<Note> {
        self.cache.get_by_id(id).await.expect("get_by_id")
    }

    pub async fn all_cached(&self) -> Vec<Note> {
        self.cache.get_all().await.expect("get_all")
    }

    pub async fn any_cached(&self) -> Note {
        self.all_cached()
            .await
            .into_iter()
            .next()
            .expect("seeded cache is not empty")
    }

    pub async fn remote_live(&self, note: &Note) -> Option<Note> {
        self.remote.find(note).await.expect("find")
    }
}

/// Cache wrapper that fails on the `FORCE_*` sentinels.
struct FaultyLocalStore(SqliteNoteStore);

fn forced_fault(what: &str) -> Error {
    Error::Database(format!("forced {what} fault"))
}

#[async_trait]
impl LocalStore for FaultyLocalStore {
    async fn insert(&self, note: &Note) -> Result<i64> {
        match note.id.as_str() {
            FORCE_NEW_NOTE_EXCEPTION => Err(forced_fault("insert")),
            FORCE_GENERAL_FAILURE => Ok(-1),
            _ => self.0.insert(note).await,
        }
    }

    async fn insert_many(&self, notes: &[Note]) -> Result<Vec<i64>> {
        self.0.insert_many(notes).await
    }

    async fn update(
        &self,
        id: &NoteId,
        title: &str,
        body: &str,
        timestamp: Option<Timestamp>,
    ) -> Result<i64> {
        match id.as_str() {
            FORCE_UPDATE_NOTE_EXCEPTION => Err(forced_fault("update")),
            FORCE_GENERAL_FAILURE => Ok(-1),
            _ => self.0.update(id, title, body, timestamp).await,
        }
    }

    async fn delete(&self, id: &NoteId) -> Result<i64> {
        match id.as_str() {
            FORCE_DELETE_NOTE_EXCEPTION => Err(forced_fault("delete")),
            FORCE_GENERAL_FAILURE => Ok(-1),
            _ => self.0.delete(id).await,
        }
    }

    async fn delete_many(&self, notes: &[Note]) -> Result<i64> {
        self.0.delete_many(notes).await
    }

    async fn search(&self, query: &str, order: NoteOrder, page: u32) -> Result<Vec<Note>> {
        if query == FORCE_SEARCH_NOTES_EXCEPTION {
            return Err(forced_fault("search"));
        }
        self.0.search(query, order, page).await
    }

    async fn get_by_id(&self, id: &NoteId) -> Result<Option<Note>> {
        self.0.get_by_id(id).await
    }

    async fn get_all(&self) -> Result<Vec<Note>> {
        self.0.get_all().await
    }

    async fn count(&self) -> Result<i64> {
        self.0.count().await
    }
}

/// Remote store whose every call fails as if the network were down.
struct UnreachableRemoteStore;

fn unreachable() -> Error {
    Error::Api("connection refused".into())
}

#[async_trait]
impl RemoteStore for UnreachableRemoteStore {
    async fn upsert(&self, _note: &Note) -> Result<()> {
        Err(unreachable())
    }

    async fn upsert_many(&self, _notes: &[Note]) -> Result<()> {
        Err(unreachable())
    }

    async fn delete(&self, _id: &NoteId) -> Result<()> {
        Err(unreachable())
    }

    async fn insert_tombstone(&self, _note: &Note) -> Result<()> {
        Err(unreachable())
    }

    async fn insert_tombstones(&self, _notes: &[Note]) -> Result<()> {
        Err(unreachable())
    }

    async fn delete_tombstone(&self, _note: &Note) -> Result<()> {
        Err(unreachable())
    }

    async fn get_live(&self) -> Result<Vec<Note>> {
        Err(unreachable())
    }

    async fn get_tombstones(&self) -> Result<Vec<Note>> {
        Err(unreachable())
    }

    async fn find(&self, _note: &Note) -> Result<Option<Note>> {
        Err(unreachable())
    }

    async fn delete_all(&self) -> Result<()> {
        Err(unreachable())
    }
}

/// Remote store that refuses one kind of write for chosen ids.
struct SelectiveRemoteStore {
    inner: MemoryRemoteStore,
    op: RemoteOp,
    ids: Vec<NoteId>,
}

impl SelectiveRemoteStore {
    fn check(&self, op: RemoteOp, id: &NoteId) -> Result<()> {
        if op == self.op && self.ids.contains(id) {
            return Err(Error::Api(format!("rejected {op:?} for {id}")));
        }
        Ok(())
    }

    fn check_all(&self, op: RemoteOp, notes: &[Note]) -> Result<()> {
        notes.iter().try_for_each(|note| self.check(op, &note.id))
    }
}

#[async_trait]
impl RemoteStore for SelectiveRemoteStore {
    async fn upsert(&self, note: &Note) -> Result<()> {
        self.check(RemoteOp::Upsert, &note.id)?;
        self.inner.upsert(note).await
    }

    async fn upsert_many(&self, notes: &[Note]) -> Result<()> {
        self.check_all(RemoteOp::Upsert, notes)?;
        self.inner.upsert_many(notes).await
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        self.check(RemoteOp::Delete, id)?;
        self.inner.delete(id).await
    }

    async fn insert_tombstone(&self, note: &Note) -> Result<()> {
        self.check(RemoteOp::InsertTombstone, &note.id)?;
        self.inner.insert_tombstone(note).await
    }

    async fn insert_tombstones(&self, notes: &[Note]) -> Result<()> {
        self.check_all(RemoteOp::InsertTombstone, notes)?;
        self.inner.insert_tombstones(notes).await
    }

    async fn delete_tombstone(&self, note: &Note) -> Result<()> {
        self.check(RemoteOp::DeleteTombstone, &note.id)?;
        self.inner.delete_tombstone(note).await
    }

    async fn get_live(&self) -> Result<Vec<Note>> {
        self.inner.get_live().await
    }

    async fn get_tombstones(&self) -> Result<Vec<Note>> {
        self.inner.get_tombstones().await
    }

    async fn find(&self, note: &Note) -> Result<Option<Note>> {
        self.inner.find(note).await
    }

    async fn delete_all(&self) -> Result<()> {
        self.inner.delete_all().await
    }
}
