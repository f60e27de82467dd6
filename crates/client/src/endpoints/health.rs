//! Service health endpoint, used for credential validation.

use std::time::Duration;

use evaldash_config::constants::{API_KEY_HEADER, VALIDATION_PATH};
use reqwest::Client;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Issue one authenticated `GET /health` and return the response status.
///
/// The body is ignored: only the status decides whether the key is accepted.
/// Transport failures are classified into [`ClientError::Timeout`],
/// [`ClientError::ConnectionFailed`] or [`ClientError::HttpError`].
pub async fn check_health(
    client: &Client,
    base_url: &str,
    api_key: &str,
    timeout: Duration,
) -> Result<u16> {
    let url = format!("{base_url}{VALIDATION_PATH}");
    debug!(%url, "Checking API key against health endpoint");

    client
        .get(&url)
        .header(API_KEY_HEADER, api_key)
        .timeout(timeout)
        .send()
        .await
        .map(|response| response.status().as_u16())
        .map_err(|e| ClientError::from_transport(e, timeout, &url))
}
