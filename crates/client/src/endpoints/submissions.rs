//! Submission endpoints.

use std::time::Duration;

use evaldash_config::constants::API_KEY_HEADER;
use reqwest::Client;

use super::request::{RequestContext, send_request};
use super::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::Envelope;

/// Get the scorecard of an evaluated submission.
pub async fn get_scorecard(
    client: &Client,
    base_url: &str,
    api_key: &str,
    submission_id: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let url = format!(
        "{base_url}/submissions/{}/scorecard",
        encode_path_segment(submission_id)
    );
    let builder = client.get(&url).header(API_KEY_HEADER, api_key);
    send_request(
        builder,
        RequestContext {
            endpoint: "/submissions/{id}/scorecard",
            method: "GET",
            url: &url,
            timeout,
            metrics,
        },
    )
    .await
}
