//! Evaluation service API client and its data operations.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `hackathons`: Hackathon listings, statistics, estimates and leaderboards
//! - `jobs`: Evaluation job status
//! - `submissions`: Submission scorecards
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Credential storage (the caller's [`Session`])
//! - Retrying failed calls (see [`crate::retry`])
//!
//! # Invariants
//! - Every data operation re-reads the credential and base URL from the
//!   session immediately before building its request.
//! - Calls made without an authenticated session fail with
//!   [`ClientError::NotAuthenticated`](crate::error::ClientError::NotAuthenticated)
//!   before any network traffic.

pub mod builder;

mod hackathons;
mod jobs;
mod submissions;

use std::time::Duration;

use secrecy::ExposeSecret;

use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::session::Session;

/// Evaluation service API client.
///
/// Holds only transport settings. The credential and base URL are owned by a
/// [`Session`] and passed to each call.
///
/// ```rust,ignore
/// use evaldash_client::{EvalClient, Session};
///
/// let client = EvalClient::builder().build()?;
/// let hackathons = client.list_hackathons(&session).await?;
/// ```
#[derive(Debug, Clone)]
pub struct EvalClient {
    pub(crate) http: reqwest::Client,
    pub(crate) timeout: Duration,
    pub(crate) metrics: Option<MetricsCollector>,
}

/// Credential and base URL read out of a session for one request.
pub(crate) struct RequestTarget<'s> {
    pub(crate) base_url: &'s str,
    pub(crate) api_key: &'s str,
}

impl EvalClient {
    /// Create a new client builder.
    pub fn builder() -> builder::EvalClientBuilder {
        builder::EvalClientBuilder::new()
    }

    /// Timeout applied to every data request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn target<'s>(&self, session: &'s Session) -> Result<RequestTarget<'s>> {
        let credential = session.require_credential()?;
        Ok(RequestTarget {
            base_url: session.base_url(),
            api_key: credential.expose_secret(),
        })
    }
}
