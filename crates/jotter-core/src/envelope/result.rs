//! Raw store results and the timeout-guarded calls that produce them

use std::future::Future;
use std::time::Duration;

use super::errors::{
    CACHE_ERROR_TIMEOUT, CACHE_ERROR_UNKNOWN, NETWORK_ERROR_TIMEOUT, NETWORK_ERROR_UNKNOWN,
};
use crate::error::Result;

/// Result of a single local or remote store call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreResult<T> {
    /// The call returned; the payload may still be absent
    Success(Option<T>),
    /// The call failed; carries the raw cause text
    GenericError(String),
}

impl<T> StoreResult<T> {
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::GenericError(_))
    }
}

impl<T> StoreResult<Option<T>> {
    /// Collapse a lookup that may legitimately find nothing into a nullable payload
    pub fn flatten(self) -> StoreResult<T> {
        match self {
            Self::Success(value) => StoreResult::Success(value.flatten()),
            Self::GenericError(message) => StoreResult::GenericError(message),
        }
    }
}

/// Timeouts applied to every store call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallTimeouts {
    pub cache: Duration,
    pub network: Duration,
}

impl Default for CallTimeouts {
    fn default() -> Self {
        Self {
            cache: Duration::from_secs(10),
            network: Duration::from_secs(30),
        }
    }
}

/// Run a local-store call, converting faults and timeouts into a `StoreResult`
pub async fn safe_cache_call<T, F>(timeout: Duration, call: F) -> StoreResult<T>
where
    F: Future<Output = Result<T>>,
{
    guarded_call(timeout, call, CACHE_ERROR_UNKNOWN, CACHE_ERROR_TIMEOUT).await
}

/// Run a remote-store call, converting faults and timeouts into a `StoreResult`
pub async fn safe_api_call<T, F>(timeout: Duration, call: F) -> StoreResult<T>
where
    F: Future<Output = Result<T>>,
{
    guarded_call(timeout, call, NETWORK_ERROR_UNKNOWN, NETWORK_ERROR_TIMEOUT).await
}

async fn guarded_call<T, F>(
    timeout: Duration,
    call: F,
    unknown: &str,
    timed_out: &str,
) -> StoreResult<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(value)) => StoreResult::Success(Some(value)),
        Ok(Err(error)) => StoreResult::GenericError(format!("{unknown}: {error}")),
        Err(_) => StoreResult::GenericError(timed_out.to_string()),
    }
}
