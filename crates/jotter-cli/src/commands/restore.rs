use jotter_core::envelope::handle_api_result;
use jotter_core::{EventKind, MessageKind, Note, NoteInteractors, Outcome, StateEvent};

use crate::commands::common::{ensure_succeeded, normalize_note_identifier};
use crate::error::CliError;

pub async fn run_restore(id: &str, interactors: &NoteInteractors) -> Result<(), CliError> {
    let id = normalize_note_identifier(id)?;
    let event = StateEvent::new(EventKind::RestoreDeletedNote);
    let handles = interactors.handles();

    let fetched = handles
        .network_call(handles.network.get_tombstones())
        .await;
    let fetched = handle_api_result(fetched, &event, |tombstones: Vec<Note>| {
        Outcome::data(&event, "", MessageKind::None, Some(tombstones))
    });
    let note = ensure_succeeded(fetched)?
        .data
        .unwrap_or_default()
        .into_iter()
        .find(|note| note.id == id)
        .ok_or_else(|| CliError::TombstoneNotFound(id.to_string()))?;

    let outcome = interactors
        .restore_deleted_note
        .restore_deleted_note(&note, event)
        .await
        .settle()
        .await;
    let outcome = ensure_succeeded(outcome)?;

    println!("{}", outcome.message);
    Ok(())
}
