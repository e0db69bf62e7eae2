use jotter_core::{EventKind, NoteInteractors, StateEvent};

use crate::commands::common::{ensure_succeeded, normalize_note_identifier, normalize_title};
use crate::error::CliError;

pub async fn run_add(
    title_parts: &[String],
    id: Option<&str>,
    interactors: &NoteInteractors,
) -> Result<(), CliError> {
    let title = normalize_title(title_parts)?;
    let id = id.map(normalize_note_identifier).transpose()?;

    let outcome = interactors
        .insert_new_note
        .insert_new_note(id, &title, StateEvent::new(EventKind::InsertNewNote))
        .await
        .settle()
        .await;
    let outcome = ensure_succeeded(outcome)?;

    if let Some(note) = outcome.data {
        println!("{}", note.id);
    }
    Ok(())
}
