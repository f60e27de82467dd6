//! Exit codes and output of one-shot commands against a mocked backend.

mod common;

use common::{VALID_KEY, evaldash_cmd_for, mount_get, mount_health};
use evaldash_client::testing::load_fixture;
use predicates::prelude::*;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_not_found_exit_code() {
    let server = MockServer::start().await;
    mount_health(&server).await;
    Mock::given(method("GET"))
        .and(path("/jobs/missing-job"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"detail": "Job not found"})),
        )
        .mount(&server)
        .await;

    evaldash_cmd_for(&server)
        .args(["job", "missing-job"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Could not load job status"));
}

#[tokio::test]
async fn test_service_unavailable_exit_code() {
    let server = MockServer::start().await;
    mount_health(&server).await;
    Mock::given(method("GET"))
        .and(path("/hackathons/hack-2025-spring/leaderboard"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    evaldash_cmd_for(&server)
        .args(["leaderboard", "hack-2025-spring"])
        .assert()
        .code(6);
}

#[tokio::test]
async fn test_key_revoked_after_login() {
    let server = MockServer::start().await;
    mount_health(&server).await;
    Mock::given(method("GET"))
        .and(path("/submissions/sub-001/scorecard"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"detail": "Key revoked"})),
        )
        .mount(&server)
        .await;

    evaldash_cmd_for(&server)
        .args(["scorecard", "sub-001"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Key revoked"));
}

#[tokio::test]
async fn test_invalid_json_exit_code() {
    let server = MockServer::start().await;
    mount_health(&server).await;
    Mock::given(method("GET"))
        .and(path("/hackathons/hack-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    evaldash_cmd_for(&server)
        .args(["hackathon", "hack-1"])
        .assert()
        .code(5);
}

#[tokio::test]
async fn test_leaderboard_table() {
    let server = MockServer::start().await;
    mount_health(&server).await;
    mount_get(
        &server,
        "/hackathons/hack-2025-spring/leaderboard",
        load_fixture("hackathons/leaderboard.json"),
    )
    .await;

    evaldash_cmd_for(&server)
        .args(["leaderboard", "hack-2025-spring"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Null Pointers"))
        .stdout(predicate::str::contains("Borrow Checkers"));
}

#[tokio::test]
async fn test_json_output_is_the_raw_envelope() {
    let server = MockServer::start().await;
    mount_health(&server).await;
    let fixture = load_fixture("jobs/job_status.json");
    let job_id = fixture["job_id"].as_str().unwrap_or("job-1").to_string();
    mount_get(&server, &format!("/jobs/{job_id}"), fixture.clone()).await;

    let output = evaldash_cmd_for(&server)
        .args(["--output", "json", "job", &job_id])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, fixture);
}

#[tokio::test]
async fn test_estimate_sends_selected_agents() {
    let server = MockServer::start().await;
    mount_health(&server).await;
    Mock::given(method("POST"))
        .and(path("/hackathons/hack-2025-spring/estimate"))
        .and(header("X-API-Key", VALID_KEY))
        .and(body_json(serde_json::json!({"agents": ["bug_hunter", "performance"]})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("hackathons/estimate.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    evaldash_cmd_for(&server)
        .args([
            "estimate",
            "hack-2025-spring",
            "--agent",
            "bug_hunter",
            "--agent",
            "performance",
        ])
        .assert()
        .code(0);
}
