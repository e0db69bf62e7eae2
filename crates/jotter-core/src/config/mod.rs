//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! Clients embed `EngineConfig` in their own settings files.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::envelope::CallTimeouts;
use crate::error::{Error, Result};
use crate::logging::Logger;

const DEFAULT_CACHE_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_NETWORK_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_PAGE_SIZE: u32 = 30;

/// Tunables for the interactors and the reconciler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Upper bound for a single local-store call
    #[serde(default = "default_cache_timeout_ms")]
    pub cache_timeout_ms: u64,
    /// Upper bound for a single remote-store call
    #[serde(default = "default_network_timeout_ms")]
    pub network_timeout_ms: u64,
    /// Notes per search page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Emit engine diagnostics through `tracing`
    #[serde(default = "default_log_engine_events")]
    pub log_engine_events: bool,
}

const fn default_cache_timeout_ms() -> u64 {
    DEFAULT_CACHE_TIMEOUT_MS
}

const fn default_network_timeout_ms() -> u64 {
    DEFAULT_NETWORK_TIMEOUT_MS
}

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

const fn default_log_engine_events() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_timeout_ms: DEFAULT_CACHE_TIMEOUT_MS,
            network_timeout_ms: DEFAULT_NETWORK_TIMEOUT_MS,
            page_size: DEFAULT_PAGE_SIZE,
            log_engine_events: true,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON payload
    pub fn from_json(payload: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(payload)
            .map_err(|error| Error::Config(format!("invalid engine config JSON: {error}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; a missing file yields the defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cache_timeout_ms == 0 {
            return Err(Error::Config("cache_timeout_ms must be positive".into()));
        }
        if self.network_timeout_ms == 0 {
            return Err(Error::Config("network_timeout_ms must be positive".into()));
        }
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be positive".into()));
        }
        Ok(())
    }

    pub const fn timeouts(&self) -> CallTimeouts {
        CallTimeouts {
            cache: Duration::from_millis(self.cache_timeout_ms),
            network: Duration::from_millis(self.network_timeout_ms),
        }
    }

    pub const fn logger(&self) -> Logger {
        if self.log_engine_events {
            Logger::enabled()
        } else {
            Logger::disabled()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn timeouts_follow_config() {
        let config = EngineConfig::from_json(
            r#"{ "cache_timeout_ms": 250, "network_timeout_ms": 1500 }"#,
        )
        .unwrap();
        let timeouts = config.timeouts();
        assert_eq!(timeouts.cache, Duration::from_millis(250));
        assert_eq!(timeouts.network, Duration::from_millis(1500));
    }

    #[test]
    fn rejects_unknown_fields() {
        let error = EngineConfig::from_json(r#"{ "retry_forever": true }"#).unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }

    #[test]
    fn rejects_zero_values() {
        assert!(EngineConfig::from_json(r#"{ "page_size": 0 }"#).is_err());
        assert!(EngineConfig::from_json(r#"{ "cache_timeout_ms": 0 }"#).is_err());
    }

    #[test]
    fn logger_follows_flag() {
        let quiet = EngineConfig {
            log_engine_events: false,
            ..EngineConfig::default()
        };
        assert!(!quiet.logger().is_enabled());
        assert!(EngineConfig::default().logger().is_enabled());
    }

    #[test]
    fn missing_file_is_default() {
        let tmp = tempfile::tempdir().unwrap();
        let config = EngineConfig::load_from_path(&tmp.path().join("absent.json")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
