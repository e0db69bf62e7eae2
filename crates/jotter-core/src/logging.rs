//! Engine diagnostics.
//!
//! Which messages the engine emits is decided by the `Logger` handed to each
//! interactor at construction, not by ambient state. Where they end up is
//! decided by whatever `tracing` subscriber the binary installs.

/// Logging switch passed into interactors and the reconciler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    enabled: bool,
}

impl Logger {
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Silences engine diagnostics (quiet test runs, scripted CLI use)
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Step-level bookkeeping
    pub fn debug(self, component: &str, message: &str) {
        if self.enabled {
            tracing::debug!("{component}: {message}");
        }
    }

    /// Summaries worth seeing at the default level
    pub fn info(self, component: &str, message: &str) {
        if self.enabled {
            tracing::info!("{component}: {message}");
        }
    }

    /// A store call failed and the step was skipped
    pub fn warn(self, component: &str, message: &str) {
        if self.enabled {
            tracing::warn!("{component}: {message}");
        }
    }

    /// A remote call failed during best-effort propagation and was dropped
    pub fn remote_failure(self, component: &str, operation: &str, reason: &str) {
        if self.enabled {
            tracing::warn!("{component}: remote {operation} failed, not retried: {reason}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::enabled()
    }
}
