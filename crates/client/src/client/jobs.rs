//! Evaluation job API methods for [`EvalClient`].

use crate::client::EvalClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Envelope;
use crate::session::Session;

impl EvalClient {
    /// Get the status of an evaluation job.
    pub async fn get_job_status(&self, session: &Session, job_id: &str) -> Result<Envelope> {
        let target = self.target(session)?;
        endpoints::get_job_status(
            &self.http,
            target.base_url,
            target.api_key,
            job_id,
            self.timeout,
            self.metrics.as_ref(),
        )
        .await
    }
}
