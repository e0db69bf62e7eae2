//! Store capabilities consumed by the engine, plus reference implementations.
//!
//! The interactors and the reconciler only ever see `dyn LocalStore` and
//! `dyn RemoteStore`.

mod file;
mod http;
mod memory;
mod order;
mod sqlite;

pub use file::JsonFileRemoteStore;
pub use http::HttpRemoteStore;
pub use memory::{MemoryRemoteStore, RemoteSnapshot};
pub use order::{
    NoteOrder, ORDER_BY_ASC_DATE_UPDATED, ORDER_BY_ASC_TITLE, ORDER_BY_DESC_DATE_UPDATED,
    ORDER_BY_DESC_TITLE,
};
pub use sqlite::SqliteNoteStore;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::{Note, NoteId, Timestamp};

/// Provider limit on the number of writes in one remote batch
pub const REMOTE_BATCH_LIMIT: usize = 500;

/// Reject batches the remote provider would refuse, before anything is written
pub fn ensure_batch_limit(len: usize) -> Result<()> {
    if len > REMOTE_BATCH_LIMIT {
        return Err(Error::BatchTooLarge {
            limit: REMOTE_BATCH_LIMIT,
            actual: len,
        });
    }
    Ok(())
}

/// The local persistent cache. Source of truth for the user.
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Insert a note; returns the new row id, or a non-positive value if nothing was inserted
    async fn insert(&self, note: &Note) -> Result<i64>;

    /// Insert several notes, one row id per input note
    async fn insert_many(&self, notes: &[Note]) -> Result<Vec<i64>>;

    /// Replace title and body; `timestamp` of `None` stamps the current time
    async fn update(
        &self,
        id: &NoteId,
        title: &str,
        body: &str,
        timestamp: Option<Timestamp>,
    ) -> Result<i64>;

    /// Delete one note; returns the number of rows removed
    async fn delete(&self, id: &NoteId) -> Result<i64>;

    /// Delete every note whose id appears in `notes`; returns the number of rows removed
    async fn delete_many(&self, notes: &[Note]) -> Result<i64>;

    /// One page of notes matching `query`, ordered by `order`
    async fn search(&self, query: &str, order: NoteOrder, page: u32) -> Result<Vec<Note>>;

    async fn get_by_id(&self, id: &NoteId) -> Result<Option<Note>>;

    /// Every note in the cache
    async fn get_all(&self) -> Result<Vec<Note>>;

    async fn count(&self) -> Result<i64>;
}

/// The remote document store: a live collection and a tombstone collection.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn upsert(&self, note: &Note) -> Result<()>;

    /// Fails with `Error::BatchTooLarge` above [`REMOTE_BATCH_LIMIT`] notes
    async fn upsert_many(&self, notes: &[Note]) -> Result<()>;

    async fn delete(&self, id: &NoteId) -> Result<()>;

    async fn insert_tombstone(&self, note: &Note) -> Result<()>;

    /// Fails with `Error::BatchTooLarge` above [`REMOTE_BATCH_LIMIT`] notes
    async fn insert_tombstones(&self, notes: &[Note]) -> Result<()>;

    async fn delete_tombstone(&self, note: &Note) -> Result<()>;

    async fn get_live(&self) -> Result<Vec<Note>>;

    async fn get_tombstones(&self) -> Result<Vec<Note>>;

    /// Look up the live copy of `note` by id
    async fn find(&self, note: &Note) -> Result<Option<Note>>;

    /// Wipe both collections (maintenance and tests)
    async fn delete_all(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_limit_is_inclusive() {
        assert!(ensure_batch_limit(REMOTE_BATCH_LIMIT).is_ok());
        assert!(matches!(
            ensure_batch_limit(REMOTE_BATCH_LIMIT + 1),
            Err(Error::BatchTooLarge {
                limit: 500,
                actual: 501
            })
        ));
    }
}
