use jotter_core::{EventKind, Note, NoteInteractors, StateEvent};

use crate::commands::common::{ensure_succeeded, fetch_note, normalize_note_identifier};
use crate::error::CliError;

pub async fn run_edit(
    id: &str,
    title: Option<&str>,
    body: Option<&str>,
    interactors: &NoteInteractors,
) -> Result<(), CliError> {
    if title.is_none() && body.is_none() {
        return Err(CliError::NothingToEdit);
    }
    let id = normalize_note_identifier(id)?;
    let current = fetch_note(interactors, &id).await?;

    let edited = Note {
        title: title.map_or_else(|| current.title.clone(), |title| title.trim().to_string()),
        body: body.map_or_else(|| current.body.clone(), str::to_string),
        ..current
    };

    let outcome = interactors
        .update_note
        .update_note(&edited, StateEvent::new(EventKind::UpdateNote))
        .await
        .settle()
        .await;
    let outcome = ensure_succeeded(outcome)?;

    println!("{}", outcome.message);
    Ok(())
}
