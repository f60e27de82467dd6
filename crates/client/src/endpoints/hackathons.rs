//! Hackathon endpoints: listings, statistics, cost estimates and leaderboards.

use std::time::Duration;

use evaldash_config::constants::API_KEY_HEADER;
use reqwest::Client;

use super::request::{RequestContext, send_request};
use super::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::Envelope;

/// List hackathons.
pub async fn list_hackathons(
    client: &Client,
    base_url: &str,
    api_key: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let url = format!("{base_url}/hackathons");
    let builder = client.get(&url).header(API_KEY_HEADER, api_key);
    send_request(
        builder,
        RequestContext {
            endpoint: "/hackathons",
            method: "GET",
            url: &url,
            timeout,
            metrics,
        },
    )
    .await
}

/// Get a single hackathon.
pub async fn get_hackathon(
    client: &Client,
    base_url: &str,
    api_key: &str,
    hackathon_id: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let url = format!("{base_url}/hackathons/{}", encode_path_segment(hackathon_id));
    let builder = client.get(&url).header(API_KEY_HEADER, api_key);
    send_request(
        builder,
        RequestContext {
            endpoint: "/hackathons/{id}",
            method: "GET",
            url: &url,
            timeout,
            metrics,
        },
    )
    .await
}

/// Get submission statistics for a hackathon.
pub async fn get_stats(
    client: &Client,
    base_url: &str,
    api_key: &str,
    hackathon_id: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let url = format!(
        "{base_url}/hackathons/{}/stats",
        encode_path_segment(hackathon_id)
    );
    let builder = client.get(&url).header(API_KEY_HEADER, api_key);
    send_request(
        builder,
        RequestContext {
            endpoint: "/hackathons/{id}/stats",
            method: "GET",
            url: &url,
            timeout,
            metrics,
        },
    )
    .await
}

/// Ask the backend to estimate the cost of evaluating a hackathon.
///
/// The estimate itself is free; it only prices the evaluation described by `body`.
pub async fn estimate_cost(
    client: &Client,
    base_url: &str,
    api_key: &str,
    hackathon_id: &str,
    body: &Envelope,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let url = format!(
        "{base_url}/hackathons/{}/estimate",
        encode_path_segment(hackathon_id)
    );
    let builder = client.post(&url).header(API_KEY_HEADER, api_key).json(body);
    send_request(
        builder,
        RequestContext {
            endpoint: "/hackathons/{id}/estimate",
            method: "POST",
            url: &url,
            timeout,
            metrics,
        },
    )
    .await
}

/// Get the leaderboard of a hackathon.
pub async fn get_leaderboard(
    client: &Client,
    base_url: &str,
    api_key: &str,
    hackathon_id: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Envelope> {
    let url = format!(
        "{base_url}/hackathons/{}/leaderboard",
        encode_path_segment(hackathon_id)
    );
    let builder = client.get(&url).header(API_KEY_HEADER, api_key);
    send_request(
        builder,
        RequestContext {
            endpoint: "/hackathons/{id}/leaderboard",
            method: "GET",
            url: &url,
            timeout,
            metrics,
        },
    )
    .await
}
