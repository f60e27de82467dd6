//! Hackathon API methods for [`EvalClient`].
//!
//! # What this module handles:
//! - Listing hackathons and fetching one by id
//! - Submission statistics
//! - Cost estimates
//! - Leaderboards
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints`])

use crate::client::EvalClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Envelope;
use crate::session::Session;

impl EvalClient {
    /// List hackathons.
    pub async fn list_hackathons(&self, session: &Session) -> Result<Envelope> {
        let target = self.target(session)?;
        endpoints::list_hackathons(
            &self.http,
            target.base_url,
            target.api_key,
            self.timeout,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Get a single hackathon by id.
    pub async fn get_hackathon(&self, session: &Session, hackathon_id: &str) -> Result<Envelope> {
        let target = self.target(session)?;
        endpoints::get_hackathon(
            &self.http,
            target.base_url,
            target.api_key,
            hackathon_id,
            self.timeout,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Get submission statistics for a hackathon.
    pub async fn get_stats(&self, session: &Session, hackathon_id: &str) -> Result<Envelope> {
        let target = self.target(session)?;
        endpoints::get_stats(
            &self.http,
            target.base_url,
            target.api_key,
            hackathon_id,
            self.timeout,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Estimate the cost of evaluating a hackathon.
    ///
    /// `body` is forwarded as the JSON request body.
    pub async fn estimate_cost(
        &self,
        session: &Session,
        hackathon_id: &str,
        body: &Envelope,
    ) -> Result<Envelope> {
        let target = self.target(session)?;
        endpoints::estimate_cost(
            &self.http,
            target.base_url,
            target.api_key,
            hackathon_id,
            body,
            self.timeout,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Get the leaderboard of a hackathon.
    pub async fn get_leaderboard(&self, session: &Session, hackathon_id: &str) -> Result<Envelope> {
        let target = self.target(session)?;
        endpoints::get_leaderboard(
            &self.http,
            target.base_url,
            target.api_key,
            hackathon_id,
            self.timeout,
            self.metrics.as_ref(),
        )
        .await
    }
}
