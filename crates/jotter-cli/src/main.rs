//! Jotter CLI - notes from the terminal, mirrored to a remote store
//!
//! Every command writes to the local cache first. Unless `--offline` is
//! given, the cache is reconciled with the remote store before the command
//! runs.

mod cli;
mod commands;
mod config;
mod error;


use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::common::open_interactors;
use crate::commands::count::run_count;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::list::run_list;
use crate::commands::restore::run_restore;
use crate::commands::show::run_show;
use crate::commands::sync::{run_startup_reconciliation, run_sync};
use crate::config::CliConfig;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = CliConfig::load()?.resolve(&cli)?;
    tracing::debug!(
        "Local cache at {}, remote {}",
        settings.db_path.display(),
        settings.remote.describe()
    );
    let interactors = open_interactors(&settings)?;

    if !cli.offline && !cli.command.reconciles_itself() {
        run_startup_reconciliation(&interactors).await;
    }

    match cli.command {
        Commands::Add { title, id } => run_add(&title, id.as_deref(), &interactors).await?,
        Commands::Edit { id, title, body } => {
            run_edit(&id, title.as_deref(), body.as_deref(), &interactors).await?;
        }
        Commands::Delete { ids } => run_delete(&ids, &interactors).await?,
        Commands::Restore { id } => run_restore(&id, &interactors).await?,
        Commands::List {
            query,
            order,
            page,
            json,
        } => run_list(query.as_deref(), &order, page, json, &interactors).await?,
        Commands::Count => run_count(&interactors).await?,
        Commands::Show { id, json } => run_show(&id, json, &interactors).await?,
        Commands::Sync { json } => run_sync(json, &interactors).await?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "jotter=debug,jotter_core=debug"
    } else {
        "jotter=info,jotter_core=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
