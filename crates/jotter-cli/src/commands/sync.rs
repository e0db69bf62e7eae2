use jotter_core::{NoteInteractors, ReconcileReport};

use crate::error::CliError;

pub async fn run_sync(as_json: bool, interactors: &NoteInteractors) -> Result<(), CliError> {
    let report = interactors.reconciler().run().await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Sync completed: {report}");
    }
    ensure_clean(&report)
}

/// Startup pass: the report only goes to the debug log
pub async fn run_startup_reconciliation(interactors: &NoteInteractors) -> ReconcileReport {
    let report = interactors.reconciler().run().await;
    tracing::debug!("Startup reconciliation: {report}");
    if report.failed > 0 {
        tracing::warn!(
            "Startup reconciliation skipped {} failed store calls; run `jotter sync` to retry",
            report.failed
        );
    }
    report
}

fn ensure_clean(report: &ReconcileReport) -> Result<(), CliError> {
    if report.failed > 0 {
        return Err(CliError::Rejected(format!(
            "{} store calls failed during sync",
            report.failed
        )));
    }
    Ok(())
}
