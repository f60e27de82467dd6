//! CLI command implementations.
//!
//! Every data command goes through [`fetch!`], which wraps the client call in
//! an operator-driven retry loop.

pub mod hackathons;
pub mod jobs;
pub mod shell;
pub mod submissions;

use anyhow::{Context, Result};
use evaldash_client::{
    ApiKeyAuthenticator, AttemptOutcome, ClientError, EvalClient, Envelope, MetricsCollector,
    Operation, RetryController,
};
use evaldash_config::Config;

use crate::args::OutputFormat;
use crate::interactive::{self, TerminalFeedback};

/// Shared state for one CLI invocation.
#[derive(Debug)]
pub struct AppContext {
    pub client: EvalClient,
    pub authenticator: ApiKeyAuthenticator,
    pub controller: RetryController,
    pub output: OutputFormat,
    /// Ask before re-running a failed request.
    pub prompt_retry: bool,
}

impl AppContext {
    pub fn from_config(
        config: &Config,
        metrics: Option<MetricsCollector>,
        output: OutputFormat,
        prompt_retry: bool,
    ) -> Result<Self> {
        let mut client = EvalClient::builder().from_config(config);
        let mut authenticator =
            ApiKeyAuthenticator::from_config(config).context("Failed to build HTTP client")?;
        let mut controller = RetryController::new(TerminalFeedback);

        if let Some(metrics) = metrics {
            client = client.metrics(metrics.clone());
            authenticator = authenticator.metrics(metrics.clone());
            controller = controller.with_metrics(metrics);
        }

        Ok(Self {
            client: client.build().context("Failed to build HTTP client")?,
            authenticator,
            controller,
            output,
            prompt_retry,
        })
    }
}

/// Run `op`, offering the operator a retry after each failure.
///
/// Without a retry prompt the first failure is returned as-is.
pub(crate) async fn run_with_retry<'a>(
    ctx: &AppContext,
    label: &str,
    context: &str,
    op: Operation<'a, Envelope>,
) -> std::result::Result<Envelope, ClientError> {
    let mut outcome = ctx.controller.attempt_with_message(label, op, context).await;
    loop {
        let failed = match outcome {
            AttemptOutcome::Succeeded(envelope) => return Ok(envelope),
            AttemptOutcome::Failed(failed) => failed,
        };
        if !(ctx.prompt_retry && interactive::confirm_retry(label)) {
            return Err(failed.into_error());
        }
        outcome = failed.into_retry().retry().await;
    }
}

/// Wrap a client call in [`run_with_retry`].
///
/// The call expression may only capture `Copy` values (references, ids as
/// `&str`) so that it can be re-run.
///
/// # Usage
///
/// ```ignore
/// fetch!(ctx, session, "get stats", "Could not load statistics", |client, s| client.get_stats(s, id))
/// ```
#[macro_export]
macro_rules! fetch {
    ($ctx:expr, $session:expr, $label:expr, $context:expr, |$client:ident, $s:ident| $call:expr) => {{
        let shared_client = $ctx.client.clone();
        let $s: &evaldash_client::Session = &*$session;
        let op = evaldash_client::operation(move || {
            let $client = shared_client.clone();
            async move { $call.await }
        });
        $crate::commands::run_with_retry($ctx, $label, $context, op).await
    }};
}
