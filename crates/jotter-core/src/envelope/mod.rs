//! Result envelope: raw store results in, one outcome out.
//!
//! Translation happens in two stages. The generic stage here only looks at
//! the error/success tag and whether a payload is present. Anything usable is
//! handed to the operation-specific strategy the caller passes in, which
//! decides the final message and payload.

pub mod errors;
mod result;

pub use result::{safe_api_call, safe_cache_call, CallTimeouts, StoreResult};

use crate::state::{Outcome, StateEvent};
use errors::{CACHE_DATA_NULL, NETWORK_DATA_NULL};

/// Translate a local-store result
pub fn handle_cache_result<D, T, F>(
    result: StoreResult<D>,
    event: &StateEvent,
    on_success: F,
) -> Outcome<T>
where
    F: FnOnce(D) -> Outcome<T>,
{
    translate(result, event, CACHE_DATA_NULL, on_success)
}

/// Translate a remote-store result
pub fn handle_api_result<D, T, F>(
    result: StoreResult<D>,
    event: &StateEvent,
    on_success: F,
) -> Outcome<T>
where
    F: FnOnce(D) -> Outcome<T>,
{
    translate(result, event, NETWORK_DATA_NULL, on_success)
}

fn translate<D, T, F>(
    result: StoreResult<D>,
    event: &StateEvent,
    null_reason: &str,
    on_success: F,
) -> Outcome<T>
where
    F: FnOnce(D) -> Outcome<T>,
{
    match result {
        StoreResult::GenericError(reason) => {
            Outcome::error(event, error_message(event, &reason))
        }
        StoreResult::Success(None) => Outcome::error(event, error_message(event, null_reason)),
        StoreResult::Success(Some(value)) => on_success(value),
    }
}

/// `"<context>\n\nReason: <cause>"`
pub fn error_message(event: &StateEvent, reason: &str) -> String {
    format!("{}\n\nReason: {reason}", event.error_info())
}
