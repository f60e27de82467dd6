//! Configuration types for evaldash.
//!
//! Responsibilities:
//! - Define connection settings (base URL and timeouts).
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Loading from `.env` or the environment (see `loader`).
//! - Holding the operator credential (see the client session).
//!
//! Invariants:
//! - `base_url` is always stored without a trailing slash.
//! - Durations are serialized as whole seconds.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_VALIDATION_TIMEOUT_SECS,
};

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the evaluation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Default base URL of the evaluation service (e.g. http://localhost:8000).
    ///
    /// The operator may override it at login time; logging out reverts to this value.
    pub base_url: String,
    /// Timeout for data requests (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Timeout for API key validation (serialized as seconds)
    #[serde(with = "duration_seconds", default = "default_validation_timeout")]
    pub validation_timeout: Duration,
}

fn default_validation_timeout() -> Duration {
    Duration::from_secs(DEFAULT_VALIDATION_TIMEOUT_SECS)
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            validation_timeout: default_validation_timeout(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings.
    pub connection: ConnectionConfig,
}

impl Config {
    /// Create a configuration pointing at the given base URL with default timeouts.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: base_url.into().trim_end_matches('/').to_string(),
                ..ConnectionConfig::default()
            },
        }
    }
}
