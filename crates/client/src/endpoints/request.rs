//! Single-shot request execution and response classification.
//!
//! Responsibilities:
//! - Send one request, bounded by the client timeout.
//! - Map transport failures and non-success statuses onto [`ClientError`].
//! - Decode successful bodies into an untyped [`Envelope`].
//! - Record request metrics.
//!
//! Invariants:
//! - Never retries; the caller decides whether to re-run an operation.
//! - Error messages are built from the response body, never from request headers.

use std::time::{Duration, Instant};

use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::Envelope;
use crate::validator::safe_get;

/// Per-request metadata used for error messages and metrics.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    /// Endpoint label for metrics (path template, not the concrete URL).
    pub endpoint: &'static str,
    /// HTTP method label.
    pub method: &'static str,
    /// Concrete request URL, used in error messages.
    pub url: &'a str,
    /// Timeout applied to the request, reported on timeout errors.
    pub timeout: Duration,
    pub metrics: Option<&'a MetricsCollector>,
}

/// Send a request once and decode the JSON envelope.
pub async fn send_request(builder: RequestBuilder, ctx: RequestContext<'_>) -> Result<Envelope> {
    if let Some(metrics) = ctx.metrics {
        metrics.record_request(ctx.endpoint, ctx.method);
    }

    debug!(method = ctx.method, endpoint = ctx.endpoint, "Sending request");
    let started = Instant::now();

    let result = match builder.timeout(ctx.timeout).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            if let Some(metrics) = ctx.metrics {
                metrics.record_request_duration(
                    ctx.endpoint,
                    ctx.method,
                    started.elapsed(),
                    Some(status),
                );
            }
            decode_response(response, ctx.url).await
        }
        Err(e) => {
            if let Some(metrics) = ctx.metrics {
                metrics.record_request_duration(ctx.endpoint, ctx.method, started.elapsed(), None);
            }
            Err(ClientError::from_transport(e, ctx.timeout, ctx.url))
        }
    };

    if let (Err(e), Some(metrics)) = (&result, ctx.metrics) {
        metrics.record_client_error(ctx.endpoint, ctx.method, e);
    }

    result
}

async fn decode_response(response: Response, url: &str) -> Result<Envelope> {
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("{url}: {e}")));
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    let message = error_message(&body);

    Err(match status.as_u16() {
        401 | 403 => ClientError::Unauthorized(message),
        404 => ClientError::NotFound(url.to_string()),
        code => ClientError::ApiError {
            status: code,
            url: url.to_string(),
            message,
        },
    })
}

/// Extract a readable message from an error body.
///
/// JSON bodies of the form `{"detail": "..."}` or `{"message": "..."}` yield
/// the inner text; anything else is returned as-is.
fn error_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };

    let missing = Value::Null;
    for key in ["detail", "message", "error"] {
        match safe_get(&json, key, &missing) {
            Value::String(text) => return text.clone(),
            Value::Null => continue,
            other => return other.to_string(),
        }
    }
    body.trim().to_string()
}
