use jotter_core::{EventKind, NoteInteractors, StateEvent};

use crate::commands::common::ensure_succeeded;
use crate::error::CliError;

pub async fn run_count(interactors: &NoteInteractors) -> Result<(), CliError> {
    let outcome = interactors
        .get_num_notes
        .get_num_notes(StateEvent::new(EventKind::GetNumNotes))
        .await
        .into_outcome();
    let outcome = ensure_succeeded(outcome)?;

    println!("{}", outcome.data.unwrap_or_default());
    Ok(())
}
