//! An outcome paired with the remote propagation it triggered

use std::future::Future;

use tokio::task::JoinHandle;

use super::Outcome;

/// What an interactor hands back to its caller.
///
/// The outcome is final as soon as the local write has been translated. The
/// remote leg, if any, is already running on its own task; dropping the
/// emission detaches it.
#[derive(Debug)]
pub struct Emission<T> {
    outcome: Outcome<T>,
    remote: Option<JoinHandle<()>>,
}

impl<T> Emission<T> {
    /// Emission with no remote leg (reads, failed writes)
    pub const fn local(outcome: Outcome<T>) -> Self {
        Self {
            outcome,
            remote: None,
        }
    }

    /// Spawn `remote` in the background and emit `outcome` immediately
    pub fn propagate<F>(outcome: Outcome<T>, remote: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            outcome,
            remote: Some(tokio::spawn(remote)),
        }
    }

    pub const fn outcome(&self) -> &Outcome<T> {
        &self.outcome
    }

    /// Whether a remote leg was started
    pub const fn has_remote_leg(&self) -> bool {
        self.remote.is_some()
    }

    /// Take the outcome and leave the remote leg running unobserved
    pub fn into_outcome(self) -> Outcome<T> {
        self.outcome
    }

    /// Wait for the remote leg to finish, then return the outcome.
    ///
    /// Used before process exit and in tests; the outcome itself never
    /// changes as a result of the remote leg.
    pub async fn settle(self) -> Outcome<T> {
        if let Some(handle) = self.remote {
            if let Err(error) = handle.await {
                tracing::warn!("Remote propagation task for {} aborted: {error}", self.outcome.event);
            }
        }
        self.outcome
    }
}
