//! Testing utilities for evaluation client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use evaldash_client::testing::{authenticated_session, load_fixture};
//!
//! let fixture = load_fixture("hackathons/list_hackathons.json");
//! let session = authenticated_session(&mock_server.uri(), "valid_key");
//! ```

use std::path::Path;

use secrecy::SecretString;

use crate::session::Session;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "hackathons/list_hackathons.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Wrap a plain string as a credential.
pub fn secret(value: &str) -> SecretString {
    SecretString::new(value.to_string().into())
}

/// A session already authenticated with `api_key` against `base_url`,
/// skipping validation.
pub fn authenticated_session(base_url: &str, api_key: &str) -> Session {
    let mut session = Session::new(base_url);
    session.authenticate(secret(api_key), base_url);
    session
}
