//! API key validation against the evaluation service.
//!
//! The authenticator answers one question: does the backend accept this key?
//! It is total: every failure mode (timeout, refused connection, rejected
//! key, anything unexpected) becomes an invalid outcome rather than an error,
//! and the reason is only used for diagnostics.

use std::time::Duration;

use evaldash_config::Config;
use evaldash_config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_VALIDATION_TIMEOUT_SECS};
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Why a candidate key was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The candidate was empty or whitespace; no request was sent.
    EmptyCredential,
    /// The backend did not answer within the validation timeout.
    Timeout,
    /// No connection could be established.
    ConnectionFailed,
    /// The backend answered with a non-success status.
    Rejected(u16),
    /// Any other failure while sending the request.
    Unexpected,
}

impl InvalidReason {
    /// Metrics/log label for this reason.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyCredential => "empty_credential",
            Self::Timeout => "timeout",
            Self::ConnectionFailed => "connection_failed",
            Self::Rejected(_) => "rejected",
            Self::Unexpected => "unexpected",
        }
    }
}

/// Result of validating a candidate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid(reason) => reason.as_str(),
        }
    }
}

/// Normalize a base URL by removing trailing slashes.
///
/// - `"http://localhost:8000/"` -> `"http://localhost:8000"`
/// - `"http://localhost:8000//"` -> `"http://localhost:8000"`
/// - `"http://localhost:8000"` -> unchanged
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Validates candidate API keys against the backend health endpoint.
#[derive(Debug, Clone)]
pub struct ApiKeyAuthenticator {
    http: reqwest::Client,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl ApiKeyAuthenticator {
    /// Create an authenticator with the default 5 second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_VALIDATION_TIMEOUT_SECS))
    }

    /// Create an authenticator with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;
        Ok(Self {
            http,
            timeout,
            metrics: None,
        })
    }

    /// Create an authenticator using the configured validation timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeout(config.connection.validation_timeout)
    }

    /// Attach a metrics collector recording validation outcomes.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Timeout bounding each validation request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether the backend at `base_url` accepts `credential`.
    ///
    /// Never fails: every error is reported as `false`.
    pub async fn validate(&self, credential: &SecretString, base_url: &str) -> bool {
        self.validate_detailed(credential, base_url).await.is_valid()
    }

    /// Validate `credential`, keeping the reason when it is rejected.
    pub async fn validate_detailed(
        &self,
        credential: &SecretString,
        base_url: &str,
    ) -> ValidationOutcome {
        let base_url = normalize_base_url(base_url);
        let outcome = self.check(credential, &base_url).await;

        match outcome {
            ValidationOutcome::Valid => info!(%base_url, "API key accepted"),
            ValidationOutcome::Invalid(InvalidReason::Rejected(status)) => {
                warn!(%base_url, status, "API key rejected")
            }
            ValidationOutcome::Invalid(reason) => {
                warn!(%base_url, reason = reason.as_str(), "API key validation failed")
            }
        }
        if let Some(metrics) = &self.metrics {
            metrics.record_validation(outcome.label());
        }

        outcome
    }

    async fn check(&self, credential: &SecretString, base_url: &str) -> ValidationOutcome {
        let key = credential.expose_secret();
        if key.trim().is_empty() {
            return ValidationOutcome::Invalid(InvalidReason::EmptyCredential);
        }

        match endpoints::check_health(&self.http, base_url, key, self.timeout).await {
            Ok(status) if (200..300).contains(&status) => ValidationOutcome::Valid,
            Ok(status) => ValidationOutcome::Invalid(InvalidReason::Rejected(status)),
            Err(ClientError::Timeout(_)) => ValidationOutcome::Invalid(InvalidReason::Timeout),
            Err(ClientError::ConnectionFailed(_)) => {
                ValidationOutcome::Invalid(InvalidReason::ConnectionFailed)
            }
            Err(_) => ValidationOutcome::Invalid(InvalidReason::Unexpected),
        }
    }
}
