//! Operator-driven retry of failed operations.
//!
//! Responsibilities:
//! - Run an operation exactly once per invocation and report the result
//!   through a [`Feedback`] sink.
//! - On failure, hand back a [`RetryCommand`] that re-runs the same operation
//!   when (and only when) the operator asks for it.
//!
//! Does NOT handle:
//! - Automatic re-invocation, backoff or retry budgets.
//! - Deciding whether an error is worth retrying; every failure offers a retry.
//!
//! Invariants:
//! - Panics inside an operation are caught and reported as
//!   [`ClientError::OperationPanicked`]; nothing escapes to the caller.
//! - Each retry is a fresh, independent execution of the captured operation.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::{info, warn};

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// A re-runnable, zero-argument asynchronous operation.
pub type Operation<'a, T> = Arc<dyn Fn() -> BoxFuture<'a, Result<T>> + Send + Sync + 'a>;

/// Wrap an async closure as an [`Operation`].
///
/// # Example
///
/// ```rust
/// use evaldash_client::{ClientError, operation};
///
/// let op = operation(|| async { Ok::<_, ClientError>(42) });
/// # let _ = op;
/// ```
pub fn operation<'a, T, F, Fut>(f: F) -> Operation<'a, T>
where
    F: Fn() -> Fut + Send + Sync + 'a,
    Fut: Future<Output = Result<T>> + Send + 'a,
{
    Arc::new(move || f().boxed())
}

/// Sink for success and failure indications shown to the operator.
pub trait Feedback {
    /// The operation labelled `label` succeeded.
    fn success(&self, label: &str);

    /// The operation labelled `label` failed with the user-facing `message`.
    ///
    /// `context` is the extra message supplied through
    /// [`RetryController::attempt_with_message`], if any.
    fn failure(&self, label: &str, message: &str, context: Option<&str>);
}

/// Feedback that only emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFeedback;

impl Feedback for TracingFeedback {
    fn success(&self, label: &str) {
        info!(operation = label, "Operation succeeded");
    }

    fn failure(&self, label: &str, message: &str, context: Option<&str>) {
        match context {
            Some(context) => warn!(operation = label, context, "Operation failed: {message}"),
            None => warn!(operation = label, "Operation failed: {message}"),
        }
    }
}

/// Runs operations and builds retry commands for failed ones.
#[derive(Clone)]
pub struct RetryController {
    feedback: Arc<dyn Feedback + Send + Sync>,
    metrics: Option<MetricsCollector>,
}

impl fmt::Debug for RetryController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryController")
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl Default for RetryController {
    fn default() -> Self {
        Self::new(TracingFeedback)
    }
}

impl RetryController {
    /// Create a controller reporting through `feedback`.
    pub fn new(feedback: impl Feedback + Send + Sync + 'static) -> Self {
        Self {
            feedback: Arc::new(feedback),
            metrics: None,
        }
    }

    /// Record retry invocations with `metrics`.
    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Run `op` once.
    pub async fn attempt<'a, T>(&self, label: &str, op: Operation<'a, T>) -> AttemptOutcome<'a, T> {
        self.run(label, op, None).await
    }

    /// Run `op` once, surfacing `message` alongside the error on failure.
    pub async fn attempt_with_message<'a, T>(
        &self,
        label: &str,
        op: Operation<'a, T>,
        message: &str,
    ) -> AttemptOutcome<'a, T> {
        self.run(label, op, Some(message.to_string())).await
    }

    async fn run<'a, T>(
        &self,
        label: &str,
        op: Operation<'a, T>,
        context: Option<String>,
    ) -> AttemptOutcome<'a, T> {
        // The closure body runs before the future exists, so it needs its own guard.
        let result = match std::panic::catch_unwind(AssertUnwindSafe(|| (op)())) {
            Ok(future) => match AssertUnwindSafe(future).catch_unwind().await {
                Ok(result) => result,
                Err(payload) => Err(ClientError::OperationPanicked(panic_message(
                    payload.as_ref(),
                ))),
            },
            Err(payload) => Err(ClientError::OperationPanicked(panic_message(payload.as_ref()))),
        };

        match result {
            Ok(value) => {
                self.feedback.success(label);
                AttemptOutcome::Succeeded(value)
            }
            Err(error) => {
                let message = error.user_message();
                self.feedback.failure(label, &message, context.as_deref());
                AttemptOutcome::Failed(FailedAttempt {
                    error,
                    message,
                    retry: RetryCommand {
                        label: label.to_string(),
                        context,
                        operation: op,
                        controller: self.clone(),
                    },
                })
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "operation panicked".to_string()
    }
}

/// Result of one execution of an operation.
#[derive(Debug)]
pub enum AttemptOutcome<'a, T> {
    Succeeded(T),
    Failed(FailedAttempt<'a, T>),
}

impl<'a, T> AttemptOutcome<'a, T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// The value, discarding any retry command.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Succeeded(value) => Some(value),
            Self::Failed(_) => None,
        }
    }
}

/// A failed execution together with the means to re-run it.
#[derive(Debug)]
pub struct FailedAttempt<'a, T> {
    error: ClientError,
    message: String,
    retry: RetryCommand<'a, T>,
}

impl<'a, T> FailedAttempt<'a, T> {
    pub fn error(&self) -> &ClientError {
        &self.error
    }

    /// User-facing description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extra message supplied with the attempt, if any.
    pub fn context(&self) -> Option<&str> {
        self.retry.context.as_deref()
    }

    pub fn into_retry(self) -> RetryCommand<'a, T> {
        self.retry
    }

    pub fn into_error(self) -> ClientError {
        self.error
    }
}

/// Captured operation that can be re-executed on operator request.
pub struct RetryCommand<'a, T> {
    label: String,
    context: Option<String>,
    operation: Operation<'a, T>,
    controller: RetryController,
}

impl<T> fmt::Debug for RetryCommand<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryCommand")
            .field("label", &self.label)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl<'a, T> RetryCommand<'a, T> {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the captured operation again.
    pub async fn retry(self) -> AttemptOutcome<'a, T> {
        if let Some(metrics) = &self.controller.metrics {
            metrics.record_retry(&self.label);
        }
        info!(operation = %self.label, "Retrying operation at operator request");
        self.controller
            .run(&self.label, self.operation, self.context)
            .await
    }
}
