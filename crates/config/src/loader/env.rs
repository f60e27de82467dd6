//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Builder values set before `from_env()` are overwritten only by non-empty variables.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Invalid numeric values return `ConfigError::InvalidValue`.

use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_BASE_URL, ENV_TIMEOUT, ENV_VALIDATION_TIMEOUT};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_secs(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be a whole number of seconds".to_string(),
        })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        loader.set_timeout(Some(parse_secs(ENV_TIMEOUT, &timeout)?));
    }
    if let Some(timeout) = env_var_or_none(ENV_VALIDATION_TIMEOUT) {
        loader.set_validation_timeout(Some(parse_secs(ENV_VALIDATION_TIMEOUT, &timeout)?));
    }
    Ok(())
}
