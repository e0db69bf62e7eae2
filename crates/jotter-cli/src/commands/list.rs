use jotter_core::store::NoteOrder;
use jotter_core::{EventKind, NoteInteractors, StateEvent};

use crate::commands::common::{ensure_succeeded, format_note_lines, note_to_list_item, NoteListItem};
use crate::error::CliError;

pub async fn run_list(
    query: Option<&str>,
    order: &str,
    page: u32,
    as_json: bool,
    interactors: &NoteInteractors,
) -> Result<(), CliError> {
    let query = query.map_or("", str::trim);
    let order = NoteOrder::from_token(order);

    let outcome = interactors
        .search_notes
        .search_notes(query, order, page, StateEvent::new(EventKind::SearchNotes))
        .await
        .into_outcome();
    let outcome = ensure_succeeded(outcome)?;
    let notes = outcome.data.unwrap_or_default();

    if as_json {
        let json_items = notes
            .iter()
            .map(note_to_list_item)
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if notes.is_empty() {
        println!("{}", outcome.message);
    } else {
        for line in format_note_lines(&notes) {
            println!("{line}");
        }
    }

    Ok(())
}
