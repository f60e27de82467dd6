//! Session login/logout tests against a mock backend.
//!
//! # Invariants
//! - A session only becomes authenticated after its key was accepted
//! - A rejected login leaves the previous state untouched
//! - Logout reverts the base URL and drops cached envelopes

mod common;

use common::*;
use evaldash_client::{ApiKeyAuthenticator, SessionState};
use serde_json::json;
use wiremock::matchers::{header, method, path};

async fn mount_health(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("X-API-Key", "valid_key"))
        .respond_with(ResponseTemplate::new(200))
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(401))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_login_with_valid_key() {
    let mock_server = MockServer::start().await;
    mount_health(&mock_server).await;

    let authenticator = ApiKeyAuthenticator::new().unwrap();
    let mut session = Session::new(&mock_server.uri());

    session
        .login(&authenticator, secret("valid_key"), None)
        .await
        .unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.state(), SessionState::Authenticated);
}

#[tokio::test]
async fn test_login_with_bad_key_stays_unauthenticated() {
    let mock_server = MockServer::start().await;
    mount_health(&mock_server).await;

    let authenticator = ApiKeyAuthenticator::new().unwrap();
    let mut session = Session::new(&mock_server.uri());

    let err = session
        .login(&authenticator, secret("bad_key"), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidCredentials));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_login_with_base_url_override_then_logout() {
    let mock_server = MockServer::start().await;
    mount_health(&mock_server).await;

    let authenticator = ApiKeyAuthenticator::new().unwrap();
    let mut session = Session::new("http://localhost:8000");
    let override_url = format!("{}/", mock_server.uri());

    session
        .login(&authenticator, secret("valid_key"), Some(&override_url))
        .await
        .unwrap();
    assert_eq!(session.base_url(), mock_server.uri());

    session.cache_envelope("hackathons", json!([]));
    session.logout();

    assert!(!session.is_authenticated());
    assert_eq!(session.base_url(), "http://localhost:8000");
    assert!(session.cached_envelope("hackathons").is_none());
}

#[tokio::test]
async fn test_login_unreachable_service_is_invalid_credentials() {
    let authenticator = ApiKeyAuthenticator::new().unwrap();
    let mut session = Session::new(UNREACHABLE_URL);

    let err = session
        .login(&authenticator, secret("valid_key"), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidCredentials));
    assert_eq!(
        err.user_message(),
        ClientError::InvalidCredentials.user_message()
    );
}

#[tokio::test]
async fn test_data_calls_after_logout_are_refused() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hackathons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client();
    let mut session = authenticated_session(&mock_server.uri(), "valid_key");

    client.list_hackathons(&session).await.unwrap();
    session.logout();

    let err = client.list_hackathons(&session).await.unwrap_err();
    assert!(matches!(err, ClientError::NotAuthenticated));
}

#[tokio::test]
async fn test_login_to_another_backend_drops_cached_envelopes() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    mount_health(&first).await;
    mount_health(&second).await;

    let authenticator = ApiKeyAuthenticator::new().unwrap();
    let mut session = Session::new(&first.uri());
    session
        .login(&authenticator, secret("valid_key"), None)
        .await
        .unwrap();
    session.cache_envelope("hackathons", json!([{"id": "from-first"}]));

    session
        .login(&authenticator, secret("valid_key"), Some(&second.uri()))
        .await
        .unwrap();

    assert_eq!(session.base_url(), second.uri());
    assert!(session.cached_envelope("hackathons").is_none());
}
