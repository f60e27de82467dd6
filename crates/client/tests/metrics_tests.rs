//! Tests for API metrics collection.
//!
//! These tests verify that instrumented calls record without panicking,
//! whether the collector is enabled or not.

mod common;

use std::time::Duration;

use common::*;
use evaldash_client::metrics::{ErrorCategory, MetricsCollector};
use evaldash_client::{ApiKeyAuthenticator, RetryController, operation};
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_metrics_collector_enabled_by_default() {
    let collector = MetricsCollector::new();
    assert!(collector.is_enabled());
}

#[tokio::test]
async fn test_metrics_record_disabled_collector() {
    let collector = MetricsCollector::disabled();

    // These should not panic even when disabled
    collector.record_request("/hackathons", "GET");
    collector.record_request_duration("/hackathons", "GET", Duration::from_millis(100), Some(200));
    collector.record_validation("valid");
    collector.record_retry("list hackathons");
    collector.record_client_error("/hackathons", "GET", &ClientError::NotAuthenticated);
}

#[tokio::test]
async fn test_error_category_from_client_errors() {
    assert_eq!(
        ErrorCategory::from(&ClientError::Timeout(Duration::from_secs(1))),
        ErrorCategory::Timeout
    );
    assert_eq!(
        ErrorCategory::from(&ClientError::Unauthorized("nope".into())),
        ErrorCategory::Auth
    );
}

#[tokio::test]
async fn test_instrumented_calls_succeed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/hackathons"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let metrics = MetricsCollector::new();
    let authenticator = ApiKeyAuthenticator::new()
        .unwrap()
        .metrics(metrics.clone());
    let client = EvalClient::builder()
        .metrics(metrics.clone())
        .build()
        .unwrap();
    let controller = RetryController::default().with_metrics(metrics);

    let mut session = Session::new(&mock_server.uri());
    session
        .login(&authenticator, secret("valid_key"), None)
        .await
        .unwrap();

    let session = &session;
    let outcome = controller
        .attempt(
            "list hackathons",
            operation(move || {
                let client = client.clone();
                async move { client.list_hackathons(session).await }
            }),
        )
        .await;

    let evaldash_client::AttemptOutcome::Failed(failed) = outcome else {
        panic!("expected failure");
    };
    assert!(!failed.into_retry().retry().await.is_success());
}
