use std::sync::Arc;

use chrono::{DateTime, Utc};
use jotter_core::store::{
    HttpRemoteStore, JsonFileRemoteStore, LocalStore, RemoteStore, SqliteNoteStore,
};
use jotter_core::{Disposition, MessageKind, Note, NoteId, NoteInteractors, Outcome, StateEvent};
use serde::Serialize;

use crate::config::{RemoteConfig, Settings};
use crate::error::CliError;

/// Open both stores described by `settings` and wire the interactors
pub fn open_interactors(settings: &Settings) -> Result<NoteInteractors, CliError> {
    let cache: Arc<dyn LocalStore> = Arc::new(
        SqliteNoteStore::open(&settings.db_path)?.with_page_size(settings.engine.page_size),
    );
    let network = open_remote(&settings.remote)?;
    Ok(NoteInteractors::from_config(cache, network, &settings.engine))
}

pub fn open_remote(remote: &RemoteConfig) -> Result<Arc<dyn RemoteStore>, CliError> {
    let store: Arc<dyn RemoteStore> = match remote {
        RemoteConfig::File { path } => Arc::new(JsonFileRemoteStore::open(path.clone())?),
        RemoteConfig::Http {
            base_url,
            auth_token,
        } => Arc::new(HttpRemoteStore::new(base_url.clone(), auth_token.clone())?),
    };
    Ok(store)
}

/// Look a note up through the Get-by-id interactor
pub async fn fetch_note(interactors: &NoteInteractors, id: &NoteId) -> Result<Note, CliError> {
    let outcome = interactors
        .get_note
        .get_note(id, StateEvent::new(jotter_core::EventKind::GetNote))
        .await
        .into_outcome();
    let outcome = ensure_succeeded(outcome)?;
    outcome
        .data
        .ok_or_else(|| CliError::Rejected(format!("Note not found: {id}")))
}

/// Error dispositions and failure messages become a non-zero exit
pub fn ensure_succeeded<T>(outcome: Outcome<T>) -> Result<Outcome<T>, CliError> {
    if outcome.disposition == Disposition::Error || outcome.kind == MessageKind::Error {
        return Err(CliError::Rejected(outcome.message));
    }
    Ok(outcome)
}

pub fn normalize_note_identifier(id: &str) -> Result<NoteId, CliError> {
    id.trim().parse().map_err(|_| CliError::EmptyNoteId)
}

pub fn normalize_title(parts: &[String]) -> Result<String, CliError> {
    let title = parts.join(" ");
    let title = title.trim();
    if title.is_empty() {
        Err(CliError::EmptyTitle)
    } else {
        Ok(title.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
    pub relative_time: String,
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    NoteListItem {
        id: note.id.to_string(),
        title: note.title.clone(),
        body: note.body.clone(),
        created_at: note.created_at.to_string(),
        updated_at: note.updated_at.to_string(),
        relative_time: format_relative_time(note.updated_at.unix_seconds(), now_seconds()),
    }
}

pub fn format_note_lines(notes: &[Note]) -> Vec<String> {
    let now = now_seconds();
    notes
        .iter()
        .map(|note| {
            let short_id: String = note.id.as_str().chars().take(13).collect();
            format!(
                "{short_id}  {:<40}  {}",
                note.title_preview(40),
                format_relative_time(note.updated_at.unix_seconds(), now)
            )
        })
        .collect()
}

pub fn format_note_detail(note: &Note) -> String {
    let mut detail = format!(
        "id:      {}\ntitle:   {}\ncreated: {}\nupdated: {}",
        note.id, note.title, note.created_at, note.updated_at
    );
    if !note.body.is_empty() {
        detail.push_str("\n\n");
        detail.push_str(&note.body);
    }
    detail
}

fn now_seconds() -> i64 {
    Utc::now().timestamp()
}

pub fn format_relative_time(timestamp_s: i64, now_s: i64) -> String {
    let diff = now_s.saturating_sub(timestamp_s).max(0);

    if diff < 60 {
        return "just now".to_string();
    }
    let minutes = diff / 60;
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = hours / 24;
    if days < 7 {
        return format!("{days}d ago");
    }

    DateTime::from_timestamp(timestamp_s, 0)
        .map_or_else(|| "unknown".to_string(), |date| date.format("%Y-%m-%d").to_string())
}

/// Engine over caller-provided stores (tests)
#[cfg(test)]
pub fn interactors_over(
    cache: Arc<dyn LocalStore>,
    network: Arc<dyn RemoteStore>,
) -> NoteInteractors {
    NoteInteractors::new(
        jotter_core::interactors::StoreHandles::new(cache, network)
            .with_logger(jotter_core::Logger::disabled()),
    )
}
