//! API key validation tests.
//!
//! This module tests [`ApiKeyAuthenticator`] against a mock backend:
//! - Accepted and rejected keys
//! - Timeout and connection failures mapped to `false`
//! - Base URL normalization and the `X-API-Key` header
//!
//! # Invariants
//! - `validate` never errors or panics; every failure is `false`
//! - Exactly one request is sent per validation of a non-empty key

mod common;

use std::time::Duration;

use common::*;
use evaldash_client::{ApiKeyAuthenticator, InvalidReason, ValidationOutcome};
use wiremock::matchers::{header, method, path};

#[tokio::test]
async fn test_valid_key_is_accepted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("X-API-Key", "valid_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let authenticator = ApiKeyAuthenticator::new().unwrap();
    assert!(
        authenticator
            .validate(&secret("valid_key"), &mock_server.uri())
            .await
    );
}

#[tokio::test]
async fn test_bad_key_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"detail": "Invalid API key"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let authenticator = ApiKeyAuthenticator::new().unwrap();
    let outcome = authenticator
        .validate_detailed(&secret("bad_key"), &mock_server.uri())
        .await;

    assert_eq!(outcome, ValidationOutcome::Invalid(InvalidReason::Rejected(401)));
    assert!(!outcome.is_valid());
}

#[tokio::test]
async fn test_server_error_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let authenticator = ApiKeyAuthenticator::new().unwrap();
    assert!(
        !authenticator
            .validate(&secret("valid_key"), &mock_server.uri())
            .await
    );
}

#[tokio::test]
async fn test_connection_error_is_false() {
    let authenticator = ApiKeyAuthenticator::new().unwrap();
    let outcome = authenticator
        .validate_detailed(&secret("valid_key"), UNREACHABLE_URL)
        .await;

    assert_eq!(
        outcome,
        ValidationOutcome::Invalid(InvalidReason::ConnectionFailed)
    );
}

#[tokio::test]
async fn test_timeout_is_false() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let authenticator = ApiKeyAuthenticator::with_timeout(Duration::from_millis(200)).unwrap();
    let outcome = authenticator
        .validate_detailed(&secret("valid_key"), &mock_server.uri())
        .await;

    assert_eq!(outcome, ValidationOutcome::Invalid(InvalidReason::Timeout));
}

#[tokio::test]
async fn test_malformed_base_url_is_false() {
    let authenticator = ApiKeyAuthenticator::new().unwrap();
    assert!(
        !authenticator
            .validate(&secret("valid_key"), "not a url")
            .await
    );
}

#[tokio::test]
async fn test_trailing_slashes_are_stripped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&mock_server)
        .await;

    let authenticator = ApiKeyAuthenticator::new().unwrap();
    let one_slash = format!("{}/", mock_server.uri());
    let many_slashes = format!("{}///", mock_server.uri());

    assert!(authenticator.validate(&secret("valid_key"), &one_slash).await);
    assert!(authenticator.validate(&secret("valid_key"), &many_slashes).await);
}

#[tokio::test]
async fn test_whitespace_key_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let authenticator = ApiKeyAuthenticator::new().unwrap();
    let outcome = authenticator
        .validate_detailed(&secret("   "), &mock_server.uri())
        .await;

    assert_eq!(
        outcome,
        ValidationOutcome::Invalid(InvalidReason::EmptyCredential)
    );
}
