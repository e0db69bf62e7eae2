//! Startup reconciliation between the local cache and the remote store.
//!
//! Two phases, always in this order:
//!
//! 1. Deletion sync: every remote tombstone is purged from the cache.
//! 2. Update sync: the cache and the remote live set are diffed by
//!    `updated_at` and both sides are repaired. Tombstoned ids are left out
//!    of the diff, so a purged note is never pulled back.
//!
//! Individual store failures are logged and counted; they never abort the
//! whole run.

mod deleted_notes;
mod notes;

pub use deleted_notes::SyncDeletedNotes;
pub use notes::SyncNotes;

use std::fmt;

use serde::Serialize;

use crate::interactors::StoreHandles;

/// What a reconciliation run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Cached notes removed because a remote tombstone names them
    pub purged: usize,
    /// Remote notes inserted into the cache
    pub pulled: usize,
    /// Cached notes overwritten by a newer remote copy
    pub refreshed: usize,
    /// Cached notes written to the remote live set
    pub pushed: usize,
    /// Remote live copies deleted because the note is tombstoned
    pub cleared: usize,
    /// Store calls that failed and were skipped
    pub failed: usize,
}

impl ReconcileReport {
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            purged: self.purged + other.purged,
            pulled: self.pulled + other.pulled,
            refreshed: self.refreshed + other.refreshed,
            pushed: self.pushed + other.pushed,
            cleared: self.cleared + other.cleared,
            failed: self.failed + other.failed,
        }
    }

    /// Whether the run changed anything on either side
    pub const fn changed_anything(&self) -> bool {
        self.purged + self.pulled + self.refreshed + self.pushed + self.cleared > 0
    }
}

impl fmt::Display for ReconcileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "purged {}, pulled {}, refreshed {}, pushed {}, cleared {}, failed {}",
            self.purged, self.pulled, self.refreshed, self.pushed, self.cleared, self.failed
        )
    }
}

/// Runs both phases over one set of stores.
pub struct Reconciler {
    deleted_notes: SyncDeletedNotes,
    notes: SyncNotes,
    handles: StoreHandles,
}

impl Reconciler {
    pub fn new(handles: StoreHandles) -> Self {
        Self {
            deleted_notes: SyncDeletedNotes::new(handles.clone()),
            notes: SyncNotes::new(handles.clone()),
            handles,
        }
    }

    /// Deletion sync to completion, then update sync.
    pub async fn run(&self) -> ReconcileReport {
        let deletions = self.deleted_notes.sync_deleted_notes().await;
        let updates = self.notes.sync_notes().await;
        let report = deletions.merge(updates);
        self.handles
            .logger
            .info("Reconciler", &format!("reconciliation finished: {report}"));
        report
    }
}
