//! Deletion sync: remote tombstones always win.

use super::ReconcileReport;
use crate::envelope::StoreResult;
use crate::interactors::StoreHandles;

const COMPONENT: &str = "SyncDeletedNotes";

pub struct SyncDeletedNotes {
    handles: StoreHandles,
}

impl SyncDeletedNotes {
    pub const fn new(handles: StoreHandles) -> Self {
        Self { handles }
    }

    /// Purge every cached note that has a remote tombstone.
    ///
    /// If the tombstones cannot be read, nothing is purged.
    pub async fn sync_deleted_notes(&self) -> ReconcileReport {
        let logger = self.handles.logger;
        let mut report = ReconcileReport::default();

        let tombstones = match self
            .handles
            .network_call(self.handles.network.get_tombstones())
            .await
        {
            StoreResult::Success(tombstones) => tombstones.unwrap_or_default(),
            StoreResult::GenericError(reason) => {
                logger.remote_failure(COMPONENT, "get tombstones", &reason);
                report.failed += 1;
                return report;
            }
        };
        if tombstones.is_empty() {
            logger.debug(COMPONENT, "no remote tombstones");
            return report;
        }

        match self
            .handles
            .cache_call(self.handles.cache.delete_many(&tombstones))
            .await
        {
            StoreResult::Success(deleted) => {
                report.purged = usize::try_from(deleted.unwrap_or_default()).unwrap_or(0);
                logger.debug(
                    COMPONENT,
                    &format!("num deleted notes: {} of {} tombstones", report.purged, tombstones.len()),
                );
            }
            StoreResult::GenericError(reason) => {
                logger.warn(
                    COMPONENT,
                    &format!("purging tombstoned notes failed: {reason}"),
                );
                report.failed += 1;
            }
        }
        report
    }
}
