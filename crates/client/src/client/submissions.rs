//! Submission API methods for [`EvalClient`].

use crate::client::EvalClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Envelope;
use crate::session::Session;

impl EvalClient {
    /// Get the scorecard of a submission.
    pub async fn get_scorecard(&self, session: &Session, submission_id: &str) -> Result<Envelope> {
        let target = self.target(session)?;
        endpoints::get_scorecard(
            &self.http,
            target.base_url,
            target.api_key,
            submission_id,
            self.timeout,
            self.metrics.as_ref(),
        )
        .await
    }
}
