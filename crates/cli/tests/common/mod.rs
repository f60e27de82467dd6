//! Shared helpers for evaldash CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const VALID_KEY: &str = "valid_key";

/// Environment variables that could leak from the host into a test run.
const HOST_VARS: &[&str] = &[
    "EVALDASH_BASE_URL",
    "EVALDASH_API_KEY",
    "EVALDASH_TIMEOUT",
    "EVALDASH_VALIDATION_TIMEOUT",
    "RUST_LOG",
];

/// Hermetic `evaldash` command: no `.env` and no host configuration.
pub fn evaldash_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("evaldash");
    cmd.env("DOTENV_DISABLED", "1");
    for var in HOST_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// `evaldash` pointed at `server` and logged in with [`VALID_KEY`].
pub fn evaldash_cmd_for(server: &MockServer) -> Command {
    let mut cmd = evaldash_cmd();
    cmd.env("EVALDASH_BASE_URL", server.uri())
        .env("EVALDASH_API_KEY", VALID_KEY);
    cmd
}

/// Mount a `/health` endpoint accepting only [`VALID_KEY`].
pub async fn mount_health(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("X-API-Key", VALID_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"detail": "Invalid API key"})),
        )
        .with_priority(2)
        .mount(server)
        .await;
}

/// Mount a GET endpoint answering with `body`.
pub async fn mount_get(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("X-API-Key", VALID_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
