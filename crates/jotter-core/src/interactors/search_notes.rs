//! Paged, ordered search over the local cache. Never touches the remote.

use super::StoreHandles;
use crate::envelope::handle_cache_result;
use crate::models::Note;
use crate::state::{Emission, MessageKind, Outcome, StateEvent};
use crate::store::NoteOrder;

pub const SEARCH_NOTES_SUCCESS: &str = "Successfully retrieved list of notes.";
pub const SEARCH_NOTES_NO_MATCHING_RESULTS: &str = "There are no notes that match that query.";

const COMPONENT: &str = "SearchNotes";

pub struct SearchNotes {
    handles: StoreHandles,
}

impl SearchNotes {
    pub const fn new(handles: StoreHandles) -> Self {
        Self { handles }
    }

    /// Pages are 1-based; page 0 is treated as page 1.
    pub async fn search_notes(
        &self,
        query: &str,
        order: NoteOrder,
        page: u32,
        event: StateEvent,
    ) -> Emission<Vec<Note>> {
        let page = page.max(1);
        let cache_result = self
            .handles
            .cache_call(self.handles.cache.search(query, order, page))
            .await;
        let outcome = handle_cache_result(cache_result, &event, |notes| on_found(&event, notes));

        self.handles.logger.debug(
            COMPONENT,
            &format!(
                "{event} query={query:?} order={} page={page} -> {}",
                order.token(),
                outcome.message.replace('\n', " ")
            ),
        );
        Emission::local(outcome)
    }
}

fn on_found(event: &StateEvent, notes: Vec<Note>) -> Outcome<Vec<Note>> {
    if notes.is_empty() {
        Outcome::data(event, SEARCH_NOTES_NO_MATCHING_RESULTS, MessageKind::Info, None)
    } else {
        Outcome::data(event, SEARCH_NOTES_SUCCESS, MessageKind::None, Some(notes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Disposition, EventKind};
    use crate::testing::{TestStores, FORCE_SEARCH_NOTES_EXCEPTION};
    use pretty_assertions::assert_eq;

    fn event() -> StateEvent {
        StateEvent::new(EventKind::SearchNotes)
    }

    #[tokio::test]
    async fn blank_query_success_confirm_notes_retrieved() {
        let stores = TestStores::seeded().await;
        let interactor = SearchNotes::new(stores.handles());

        let outcome = interactor
            .search_notes("", NoteOrder::UpdatedDesc, 1, event())
            .await
            .settle()
            .await;

        assert_eq!(outcome.message, SEARCH_NOTES_SUCCESS);
        let notes = outcome.data.unwrap();
        assert!(!notes.is_empty());
        assert!(notes
            .windows(2)
            .all(|pair| pair[0].updated_at >= pair[1].updated_at));
    }

    #[tokio::test]
    async fn random_query_success_confirm_no_results() {
        let stores = TestStores::seeded().await;
        let interactor = SearchNotes::new(stores.handles());

        let outcome = interactor
            .search_notes("zxcvbnm-no-such-note", NoteOrder::UpdatedDesc, 1, event())
            .await
            .settle()
            .await;

        assert_eq!(outcome.message, SEARCH_NOTES_NO_MATCHING_RESULTS);
        assert_eq!(outcome.disposition, Disposition::SuccessWithoutData);
        assert!(!outcome.is_error());
    }

    #[tokio::test]
    async fn search_fail_confirm_generic_error() {
        let stores = TestStores::seeded().await;
        let interactor = SearchNotes::new(stores.handles());

        let outcome = interactor
            .search_notes(FORCE_SEARCH_NOTES_EXCEPTION, NoteOrder::UpdatedDesc, 1, event())
            .await
            .settle()
            .await;

        assert!(outcome.is_error());
        assert!(outcome
            .message
            .starts_with("Error getting list of notes.\n\nReason: "));
    }

    #[tokio::test]
    async fn page_zero_is_first_page() {
        let stores = TestStores::seeded().await;
        let interactor = SearchNotes::new(stores.handles());

        let zero = interactor
            .search_notes("", NoteOrder::TitleAsc, 0, event())
            .await
            .settle()
            .await;
        let one = interactor
            .search_notes("", NoteOrder::TitleAsc, 1, event())
            .await
            .settle()
            .await;

        assert_eq!(zero.data, one.data);
    }
}
