use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jotter")]
#[command(about = "Offline-first notes with a synced remote copy")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to local database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Use a JSON file as the remote store
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "remote_url")]
    pub remote_path: Option<PathBuf>,

    /// Use an HTTP document service as the remote store
    #[arg(long, global = true, value_name = "URL")]
    pub remote_url: Option<String>,

    /// Skip startup reconciliation
    #[arg(long, global = true)]
    pub offline: bool,

    /// Show engine diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title
        title: Vec<String>,
        /// Use this id instead of generating one
        #[arg(long, value_name = "ID")]
        id: Option<String>,
    },
    /// Change the title and/or body of a note
    Edit {
        /// Note ID
        id: String,
        /// New title (keeps the current one when omitted)
        #[arg(long)]
        title: Option<String>,
        /// New body (keeps the current one when omitted)
        #[arg(long)]
        body: Option<String>,
    },
    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Note IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Bring back a deleted note from the remote tombstones
    Restore {
        /// Note ID
        id: String,
    },
    /// List or search notes
    #[command(alias = "search")]
    List {
        /// Only notes whose title or body contains this text
        query: Option<String>,
        /// Sort order: -updated_at, +updated_at, -title or +title
        #[arg(long, default_value = "-updated_at", allow_hyphen_values = true)]
        order: String,
        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the number of notes
    Count,
    /// Print one note
    Show {
        /// Note ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Reconcile the local cache with the remote store
    Sync {
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// `sync` reconciles explicitly, so the startup pass is redundant
    pub const fn reconciles_itself(&self) -> bool {
        matches!(self, Self::Sync { .. })
    }
}
