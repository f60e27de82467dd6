//! Centralized constants for the evaldash workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default backend base URL when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default HTTP request timeout for data requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default timeout for API key validation in seconds.
///
/// Kept short so a misbehaving backend never blocks the login form for long.
pub const DEFAULT_VALIDATION_TIMEOUT_SECS: u64 = 5;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Timeout Configuration Bounds
// =============================================================================

/// Maximum allowed data request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Maximum allowed validation timeout in seconds.
pub const MAX_VALIDATION_TIMEOUT_SECS: u64 = 60;

// =============================================================================
// Backend Surface
// =============================================================================

/// Header carrying the operator credential on every request.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Lightweight, side-effect-free endpoint used to validate credentials.
pub const VALIDATION_PATH: &str = "/health";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable holding the default base URL.
pub const ENV_BASE_URL: &str = "EVALDASH_BASE_URL";

/// Environment variable holding the data request timeout (seconds).
pub const ENV_TIMEOUT: &str = "EVALDASH_TIMEOUT";

/// Environment variable holding the validation timeout (seconds).
pub const ENV_VALIDATION_TIMEOUT: &str = "EVALDASH_VALIDATION_TIMEOUT";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
