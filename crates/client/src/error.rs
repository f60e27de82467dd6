//! Error types for the evaluation service client.
//!
//! Invariants:
//! - No variant ever carries the operator credential.
//! - `user_message()` never reveals which failure class caused a rejected login.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during evaluation service client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The candidate API key was not accepted.
    ///
    /// Deliberately generic: timeouts, refused connections and rejected keys
    /// all collapse into this variant at the login boundary.
    #[error("Invalid API key or the evaluation service is unreachable")]
    InvalidCredentials,

    /// A data operation was attempted before a successful login.
    #[error("Not authenticated, please log in first")]
    NotAuthenticated,

    /// The backend rejected the session credential (HTTP 401/403).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from the backend.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Response body could not be decoded as JSON.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection could not be established.
    #[error("Connection failed to {0}")]
    ConnectionFailed(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A retried operation panicked instead of returning an error.
    #[error("Operation failed unexpectedly: {0}")]
    OperationPanicked(String),
}

impl ClientError {
    /// Classify a transport-level reqwest error.
    ///
    /// Timeouts and connection failures get their own variants so that
    /// diagnostics and metrics can tell them apart.
    pub fn from_transport(err: reqwest::Error, timeout: Duration, url: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_connect() {
            Self::ConnectionFailed(url.to_string())
        } else {
            Self::HttpError(err)
        }
    }

    /// Check if this error is a transient network failure.
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::Timeout(_) | Self::ConnectionFailed(_)
        )
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::NotAuthenticated | Self::Unauthorized(_)
        )
    }

    /// Message suitable for showing to the operator.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Invalid API key. Please check it and try again.".into(),
            Self::NotAuthenticated => "Please log in first.".into(),
            Self::Unauthorized(_) => {
                "Your API key was rejected by the evaluation service. Please log in again.".into()
            }
            Self::Timeout(_) | Self::ConnectionFailed(_) | Self::HttpError(_) => {
                "Could not reach the evaluation service.".into()
            }
            Self::NotFound(what) => format!("Not found: {what}"),
            Self::ApiError {
                status, message, ..
            } => format!("The evaluation service returned an error ({status}): {message}"),
            Self::InvalidResponse(_) => {
                "The evaluation service returned a response that could not be read.".into()
            }
            Self::InvalidUrl(url) => format!("Invalid service URL: {url}"),
            Self::OperationPanicked(_) => "The operation failed unexpectedly.".into(),
        }
    }
}
