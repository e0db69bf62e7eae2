//! Shared entry point used by clients.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::interactors::{
    DeleteMultipleNotes, DeleteNote, GetNote, GetNumNotes, InsertNewNote, RestoreDeletedNote,
    SearchNotes, StoreHandles, UpdateNote,
};
use crate::models::NoteFactory;
use crate::store::{LocalStore, RemoteStore};
use crate::sync::Reconciler;

/// Every interactor, wired over one set of stores.
pub struct NoteInteractors {
    pub insert_new_note: InsertNewNote,
    pub update_note: UpdateNote,
    pub delete_note: DeleteNote,
    pub delete_multiple_notes: DeleteMultipleNotes,
    pub restore_deleted_note: RestoreDeletedNote,
    pub search_notes: SearchNotes,
    pub get_num_notes: GetNumNotes,
    pub get_note: GetNote,
    handles: StoreHandles,
}

impl NoteInteractors {
    pub fn new(handles: StoreHandles) -> Self {
        Self {
            insert_new_note: InsertNewNote::new(handles.clone(), NoteFactory::new()),
            update_note: UpdateNote::new(handles.clone()),
            delete_note: DeleteNote::new(handles.clone()),
            delete_multiple_notes: DeleteMultipleNotes::new(handles.clone()),
            restore_deleted_note: RestoreDeletedNote::new(handles.clone()),
            search_notes: SearchNotes::new(handles.clone()),
            get_num_notes: GetNumNotes::new(handles.clone()),
            get_note: GetNote::new(handles.clone()),
            handles,
        }
    }

    /// Wire the stores with the timeouts and logging from `config`
    pub fn from_config(
        cache: Arc<dyn LocalStore>,
        network: Arc<dyn RemoteStore>,
        config: &EngineConfig,
    ) -> Self {
        let handles = StoreHandles::new(cache, network)
            .with_timeouts(config.timeouts())
            .with_logger(config.logger());
        Self::new(handles)
    }

    pub const fn handles(&self) -> &StoreHandles {
        &self.handles
    }

    /// Startup reconciliation over the same stores
    pub fn reconciler(&self) -> Reconciler {
        Reconciler::new(self.handles.clone())
    }
}
