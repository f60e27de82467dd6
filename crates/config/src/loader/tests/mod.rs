//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Environment variables read by the loader, cleared by tests that need a blank slate.
pub const LOADER_VARS: [&str; 3] = [
    "EVALDASH_BASE_URL",
    "EVALDASH_TIMEOUT",
    "EVALDASH_VALIDATION_TIMEOUT",
];
