//! Evaluation service API client.
//!
//! This crate provides the session authentication and resilient API access
//! layer of the evaldash dashboard: API key validation, an explicit session
//! store, operator-driven retries, defensive access to loosely-typed
//! responses, and display formatters.

mod auth;
pub mod client;
pub mod error;
pub mod format;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
pub mod retry;
pub mod session;
pub mod validator;

mod endpoints;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{ApiKeyAuthenticator, InvalidReason, ValidationOutcome, normalize_base_url};
pub use client::EvalClient;
pub use client::builder::EvalClientBuilder;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{Envelope, ResourceKind};
pub use retry::{
    AttemptOutcome, FailedAttempt, Feedback, Operation, RetryCommand, RetryController,
    TracingFeedback, operation,
};
pub use session::{Session, SessionState};
