use jotter_core::NoteInteractors;

use crate::commands::common::{
    fetch_note, format_note_detail, normalize_note_identifier, note_to_list_item,
};
use crate::error::CliError;

pub async fn run_show(id: &str, as_json: bool, interactors: &NoteInteractors) -> Result<(), CliError> {
    let id = normalize_note_identifier(id)?;
    let note = fetch_note(interactors, &id).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&note_to_list_item(&note))?);
    } else {
        println!("{}", format_note_detail(&note));
    }
    Ok(())
}
