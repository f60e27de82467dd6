//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

// Re-export test utilities from evaldash-client
#[allow(unused_imports)]
pub use evaldash_client::testing::{authenticated_session, load_fixture, secret};

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use evaldash_client::{ClientError, EvalClient, Session};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Address nothing listens on, for connection-failure tests.
#[allow(dead_code)]
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

/// Client with a short timeout so failing tests finish quickly.
#[allow(dead_code)]
pub fn test_client() -> EvalClient {
    EvalClient::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("client should build")
}
