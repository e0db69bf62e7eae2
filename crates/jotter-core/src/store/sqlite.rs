//! `SQLite` implementation of the local cache

#![allow(clippy::cast_possible_wrap)] // SQLite uses i64 for counts, LIMIT and OFFSET

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::types::Type;
use rusqlite::{params, Connection};
use tokio::sync::Mutex;

use super::{LocalStore, NoteOrder};
use crate::db::Database;
use crate::error::Result;
use crate::models::{Note, NoteId, Timestamp};

/// Default number of notes per search page
pub const NOTE_PAGINATION_PAGE_SIZE: u32 = 30;

const NOTE_COLUMNS: &str = "id, title, body, updated_at, created_at";

/// Thread-safe `LocalStore` over a single `SQLite` connection.
#[derive(Clone)]
pub struct SqliteNoteStore {
    db: Arc<Mutex<Database>>,
    page_size: u32,
}

impl SqliteNoteStore {
    /// Open (or create) the cache at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Database::open(path)?))
    }

    /// Open an in-memory cache (primarily for tests)
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            page_size: NOTE_PAGINATION_PAGE_SIZE,
        }
    }

    /// Override the search page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Parse a note from a database row
    fn parse_note(row: &rusqlite::Row<'_>) -> rusqlite::Result<Note> {
        let id: String = row.get(0)?;
        Ok(Note {
            id: id
                .parse()
                .map_err(|error| conversion_error(0, Type::Text, error))?,
            title: row.get(1)?,
            body: row.get(2)?,
            updated_at: Timestamp::from_unix_seconds(row.get(3)?)
                .map_err(|error| conversion_error(3, Type::Integer, error))?,
            created_at: Timestamp::from_unix_seconds(row.get(4)?)
                .map_err(|error| conversion_error(4, Type::Integer, error))?,
        })
    }

    fn insert_row(conn: &Connection, note: &Note) -> Result<i64> {
        let rows = conn.execute(
            "INSERT OR IGNORE INTO notes (id, title, body, updated_at, created_at)
             VALUES (?, ?, ?, ?, ?)",
            params![
                note.id.as_str(),
                note.title,
                note.body,
                note.updated_at.unix_seconds(),
                note.created_at.unix_seconds()
            ],
        )?;

        // An existing id is left untouched; one record per id
        if rows == 0 {
            return Ok(-1);
        }
        Ok(conn.last_insert_rowid())
    }
}

fn conversion_error(
    column: usize,
    kind: Type,
    error: crate::error::Error,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, kind, Box::new(error))
}

/// `%query%` with LIKE wildcards in the query escaped
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.trim().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl LocalStore for SqliteNoteStore {
    async fn insert(&self, note: &Note) -> Result<i64> {
        let db = self.db.lock().await;
        Self::insert_row(db.connection(), note)
    }

    async fn insert_many(&self, notes: &[Note]) -> Result<Vec<i64>> {
        let mut db = self.db.lock().await;
        let tx = db.connection_mut().transaction()?;
        let ids = notes
            .iter()
            .map(|note| Self::insert_row(&tx, note))
            .collect::<Result<Vec<_>>>()?;
        tx.commit()?;
        Ok(ids)
    }

    async fn update(
        &self,
        id: &NoteId,
        title: &str,
        body: &str,
        timestamp: Option<Timestamp>,
    ) -> Result<i64> {
        let updated_at = timestamp.unwrap_or_else(Timestamp::now);
        let db = self.db.lock().await;
        let rows = db.connection().execute(
            "UPDATE notes SET title = ?, body = ?, updated_at = ? WHERE id = ?",
            params![title, body, updated_at.unix_seconds(), id.as_str()],
        )?;
        Ok(rows as i64)
    }

    async fn delete(&self, id: &NoteId) -> Result<i64> {
        let db = self.db.lock().await;
        let rows = db
            .connection()
            .execute("DELETE FROM notes WHERE id = ?", params![id.as_str()])?;
        Ok(rows as i64)
    }

    async fn delete_many(&self, notes: &[Note]) -> Result<i64> {
        let mut db = self.db.lock().await;
        let tx = db.connection_mut().transaction()?;
        let mut deleted = 0_i64;
        {
            let mut stmt = tx.prepare("DELETE FROM notes WHERE id = ?")?;
            for note in notes {
                deleted += stmt.execute(params![note.id.as_str()])? as i64;
            }
        }
        tx.commit()?;
        Ok(deleted)
    }

    async fn search(&self, query: &str, order: NoteOrder, page: u32) -> Result<Vec<Note>> {
        let page = page.max(1);
        let offset = i64::from(page - 1) * i64::from(self.page_size);
        let sql = format!(
            "SELECT {NOTE_COLUMNS} FROM notes
             WHERE title LIKE ?1 ESCAPE '\\' OR body LIKE ?1 ESCAPE '\\'
             ORDER BY {}
             LIMIT ?2 OFFSET ?3",
            order.sql()
        );

        let db = self.db.lock().await;
        let mut stmt = db.connection().prepare(&sql)?;
        let notes = stmt
            .query_map(
                params![like_pattern(query), i64::from(self.page_size), offset],
                Self::parse_note,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notes)
    }

    async fn get_by_id(&self, id: &NoteId) -> Result<Option<Note>> {
        let db = self.db.lock().await;
        let result = db.connection().query_row(
            &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?"),
            params![id.as_str()],
            Self::parse_note,
        );

        match result {
            Ok(note) => Ok(Some(note)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn get_all(&self) -> Result<Vec<Note>> {
        let db = self.db.lock().await;
        let mut stmt = db.connection().prepare(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes ORDER BY updated_at DESC, id ASC"
        ))?;
        let notes = stmt
            .query_map([], Self::parse_note)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notes)
    }

    async fn count(&self) -> Result<i64> {
        let db = self.db.lock().await;
        let count = db
            .connection()
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count)
    }
}
