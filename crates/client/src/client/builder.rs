//! Client builder for constructing [`EvalClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Configuring the underlying HTTP client (timeouts, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`EvalClient`] methods)
//! - Choosing the base URL (owned by [`crate::session::Session`])

use std::time::Duration;

use evaldash_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

use crate::client::EvalClient;
use crate::error::Result;
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`EvalClient`].
///
/// # Example
///
/// ```rust,ignore
/// use evaldash_client::EvalClient;
///
/// let client = EvalClient::builder()
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct EvalClientBuilder {
    timeout: Duration,
    max_redirects: usize,
    metrics: Option<MetricsCollector>,
}

impl Default for EvalClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            metrics: None,
        }
    }
}

impl EvalClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of redirects followed per request.
    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Set the metrics collector for request tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.timeout = config.connection.timeout;
        self
    }

    /// Build the [`EvalClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<EvalClient> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(self.max_redirects))
            .build()?;

        Ok(EvalClient {
            http,
            timeout: self.timeout,
            metrics: self.metrics,
        })
    }
}
