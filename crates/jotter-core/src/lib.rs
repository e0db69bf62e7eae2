//! jotter-core - offline-first note engine
//!
//! Notes live in a local cache that is the user's source of truth. Every
//! write is applied locally first and then mirrored to a remote store on a
//! background task. At startup the [`sync::Reconciler`] repairs whatever the
//! background writes missed.
//!
//! Clients normally go through [`NoteInteractors`], which wires every
//! interactor over one [`interactors::StoreHandles`].

pub mod config;
pub mod db;
pub mod envelope;
pub mod error;
pub mod interactors;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod sync;
pub mod util;

#[cfg(test)]
mod testing;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use logging::Logger;
pub use models::{Note, NoteFactory, NoteId, Timestamp};
pub use services::NoteInteractors;
pub use state::{Disposition, Emission, EventKind, MessageKind, Outcome, StateEvent};
pub use sync::{ReconcileReport, Reconciler};
