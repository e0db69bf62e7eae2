use jotter_core::{EventKind, Note, NoteFactory, NoteId, NoteInteractors, StateEvent};

use crate::commands::common::{ensure_succeeded, normalize_note_identifier};
use crate::error::CliError;

pub async fn run_delete(ids: &[String], interactors: &NoteInteractors) -> Result<(), CliError> {
    let ids = ids
        .iter()
        .map(|id| normalize_note_identifier(id))
        .collect::<Result<Vec<_>, _>>()?;

    let outcome = if let [id] = ids.as_slice() {
        let note = lookup_or_placeholder(interactors, id).await;
        interactors
            .delete_note
            .delete_note(&note, StateEvent::new(EventKind::DeleteNote))
            .await
            .settle()
            .await
    } else {
        let mut notes = Vec::with_capacity(ids.len());
        for id in &ids {
            notes.push(lookup_or_placeholder(interactors, id).await);
        }
        interactors
            .delete_multiple_notes
            .delete_notes(&notes, StateEvent::new(EventKind::DeleteMultipleNotes))
            .await
            .settle()
            .await
    };
    let outcome = ensure_succeeded(outcome)?;

    println!("{}", outcome.message);
    Ok(())
}

/// The cached note, or an empty stand-in whose delete will simply affect no rows.
async fn lookup_or_placeholder(interactors: &NoteInteractors, id: &NoteId) -> Note {
    let outcome = interactors
        .get_note
        .get_note(id, StateEvent::new(EventKind::GetNote))
        .await
        .into_outcome();
    outcome.data.unwrap_or_else(|| {
        tracing::debug!("Note {id} is not cached");
        NoteFactory::new().create_single_note(Some(id.clone()), "", "")
    })
}
