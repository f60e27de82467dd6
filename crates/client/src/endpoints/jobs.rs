//! Evaluation job endpoints.

use std::time::Duration;

use evaldash_config::constants::API_KEY_HEADER;
use reqwest::Client;

use super::request::{RequestContext, send_request};
use super::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::Envelope;

/// Get the status of an evaluation job.
pub async fn get_job_status(
    client: &Client,
    base_url: &str,
    api_key: &str,
    job_id: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let url = format!("{base_url}/jobs/{}", encode_path_segment(job_id));
    let builder = client.get(&url).header(API_KEY_HEADER, api_key);
    send_request(
        builder,
        RequestContext {
            endpoint: "/jobs/{id}",
            method: "GET",
            url: &url,
            timeout,
            metrics,
        },
    )
    .await
}
