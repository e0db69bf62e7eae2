//! Count the notes in the local cache.

use super::StoreHandles;
use crate::envelope::handle_cache_result;
use crate::state::{Emission, MessageKind, Outcome, StateEvent};

pub const GET_NUM_NOTES_SUCCESS: &str =
    "Successfully retrieved the number of notes from the cache.";

pub struct GetNumNotes {
    handles: StoreHandles,
}

impl GetNumNotes {
    pub const fn new(handles: StoreHandles) -> Self {
        Self { handles }
    }

    pub async fn get_num_notes(&self, event: StateEvent) -> Emission<i64> {
        let cache_result = self.handles.cache_call(self.handles.cache.count()).await;
        let outcome = handle_cache_result(cache_result, &event, |count| {
            Outcome::data(&event, GET_NUM_NOTES_SUCCESS, MessageKind::None, Some(count))
        });
        Emission::local(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EventKind;
    use crate::testing::TestStores;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn get_num_notes_success_confirm_correct() {
        let stores = TestStores::seeded().await;
        let interactor = GetNumNotes::new(stores.handles());

        let outcome = interactor
            .get_num_notes(StateEvent::new(EventKind::GetNumNotes))
            .await
            .settle()
            .await;

        assert_eq!(outcome.message, GET_NUM_NOTES_SUCCESS);
        assert_eq!(outcome.data, Some(stores.cache_count().await));
    }

    #[tokio::test]
    async fn zero_is_a_count_not_a_missing_value() {
        let stores = TestStores::empty().await;
        let interactor = GetNumNotes::new(stores.handles());

        let outcome = interactor
            .get_num_notes(StateEvent::new(EventKind::GetNumNotes))
            .await
            .settle()
            .await;

        assert_eq!(outcome.message, GET_NUM_NOTES_SUCCESS);
        assert_eq!(outcome.data, Some(0));
    }
}
