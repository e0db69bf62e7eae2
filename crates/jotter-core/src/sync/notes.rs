//! Update sync: diff cache and remote live set by `updated_at`.

use std::collections::{HashMap, HashSet};

use super::ReconcileReport;
use crate::envelope::StoreResult;
use crate::interactors::StoreHandles;
use crate::models::{Note, NoteId};
use crate::store::REMOTE_BATCH_LIMIT;

const COMPONENT: &str = "SyncNotes";

pub struct SyncNotes {
    handles: StoreHandles,
}

impl SyncNotes {
    pub const fn new(handles: StoreHandles) -> Self {
        Self { handles }
    }

    /// Repair both sides.
    ///
    /// For every remote note: a strictly newer remote copy overwrites the
    /// cached one (taking the remote `updated_at`); otherwise the cached note
    /// is pushed. Remote notes missing from the cache are inserted. Cached
    /// notes the remote has never seen are pushed at the end.
    ///
    /// Tombstoned ids are never pulled or pushed. A live remote copy of a
    /// tombstoned note is deleted from the remote.
    pub async fn sync_notes(&self) -> ReconcileReport {
        let mut report = ReconcileReport::default();

        let Some(cached) = self.cached_notes(&mut report).await else {
            return report;
        };
        let Some(remote) = self.remote_notes(&mut report).await else {
            return report;
        };
        let Some(tombstoned) = self.tombstoned_ids(&mut report).await else {
            return report;
        };

        let mut unmatched: HashMap<NoteId, Note> = cached
            .into_iter()
            .filter(|note| !tombstoned.contains(&note.id))
            .map(|note| (note.id.clone(), note))
            .collect();

        for remote_note in remote {
            if tombstoned.contains(&remote_note.id) {
                self.clear_live_copy(&remote_note.id, &mut report).await;
                continue;
            }
            match unmatched.remove(&remote_note.id) {
                Some(cached_note) => {
                    self.reconcile_pair(cached_note, &remote_note, &mut report)
                        .await;
                }
                None => self.pull(&remote_note, &mut report).await,
            }
        }

        let leftovers: Vec<Note> = unmatched.into_values().collect();
        self.push_leftovers(&leftovers, &mut report).await;

        self.handles.logger.debug(COMPONENT, &format!("{report}"));
        report
    }

    async fn cached_notes(&self, report: &mut ReconcileReport) -> Option<Vec<Note>> {
        match self
            .handles
            .cache_call(self.handles.cache.get_all())
            .await
        {
            StoreResult::Success(notes) => Some(notes.unwrap_or_default()),
            StoreResult::GenericError(reason) => {
                self.handles
                    .logger
                    .warn(COMPONENT, &format!("reading cached notes failed: {reason}"));
                report.failed += 1;
                None
            }
        }
    }

    async fn remote_notes(&self, report: &mut ReconcileReport) -> Option<Vec<Note>> {
        match self
            .handles
            .network_call(self.handles.network.get_live())
            .await
        {
            StoreResult::Success(notes) => Some(notes.unwrap_or_default()),
            StoreResult::GenericError(reason) => {
                self.handles
                    .logger
                    .remote_failure(COMPONENT, "get live notes", &reason);
                report.failed += 1;
                None
            }
        }
    }

    async fn tombstoned_ids(&self, report: &mut ReconcileReport) -> Option<HashSet<NoteId>> {
        match self
            .handles
            .network_call(self.handles.network.get_tombstones())
            .await
        {
            StoreResult::Success(notes) => Some(
                notes
                    .unwrap_or_default()
                    .into_iter()
                    .map(|note| note.id)
                    .collect(),
            ),
            StoreResult::GenericError(reason) => {
                self.handles
                    .logger
                    .remote_failure(COMPONENT, "get tombstones", &reason);
                report.failed += 1;
                None
            }
        }
    }

    async fn reconcile_pair(&self, cached: Note, remote: &Note, report: &mut ReconcileReport) {
        if remote.updated_at > cached.updated_at {
            let result = self
                .handles
                .cache_call(self.handles.cache.update(
                    &remote.id,
                    &remote.title,
                    &remote.body,
                    Some(remote.updated_at),
                ))
                .await;
            match result {
                StoreResult::Success(Some(rows)) if rows > 0 => report.refreshed += 1,
                StoreResult::Success(_) => {
                    self.handles
                        .logger
                        .debug(COMPONENT, &format!("{} was not refreshed", remote.id));
                }
                StoreResult::GenericError(reason) => {
                    self.handles.logger.warn(
                        COMPONENT,
                        &format!("refreshing {} failed: {reason}", remote.id),
                    );
                    report.failed += 1;
                }
            }
        } else if cached != *remote {
            self.push(&[cached], "upsert", report).await;
        }
    }

    async fn pull(&self, remote: &Note, report: &mut ReconcileReport) {
        match self
            .handles
            .cache_call(self.handles.cache.insert(remote))
            .await
        {
            StoreResult::Success(Some(row_id)) if row_id > 0 => report.pulled += 1,
            StoreResult::Success(_) => {
                self.handles
                    .logger
                    .debug(COMPONENT, &format!("{} was not inserted", remote.id));
            }
            StoreResult::GenericError(reason) => {
                self.handles
                    .logger
                    .warn(COMPONENT, &format!("pulling {} failed: {reason}", remote.id));
                report.failed += 1;
            }
        }
    }

    async fn clear_live_copy(&self, id: &NoteId, report: &mut ReconcileReport) {
        let cleared = self
            .handles
            .propagate(COMPONENT, "delete tombstoned", self.handles.network.delete(id))
            .await;
        if cleared {
            report.cleared += 1;
        } else {
            report.failed += 1;
        }
    }

    async fn push_leftovers(&self, leftovers: &[Note], report: &mut ReconcileReport) {
        for chunk in leftovers.chunks(REMOTE_BATCH_LIMIT) {
            self.push(chunk, "upsert batch", report).await;
        }
    }

    async fn push(&self, notes: &[Note], operation: &str, report: &mut ReconcileReport) {
        let call = async {
            match notes {
                [note] => self.handles.network.upsert(note).await,
                _ => self.handles.network.upsert_many(notes).await,
            }
        };
        if self.handles.propagate(COMPONENT, operation, call).await {
            report.pushed += notes.len();
        } else {
            report.failed += 1;
        }
    }
}
