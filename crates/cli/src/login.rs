//! Login gate.
//!
//! Responsibilities:
//! - Obtain an API key (flag, environment or prompt) and validate it before
//!   any data command runs.
//!
//! Invariants:
//! - A rejected key always produces the same generic message, whatever the
//!   underlying reason.
//! - The key is wrapped in a `SecretString` as soon as it is read.

use std::io::BufRead;

use anyhow::{Context, Result};
use evaldash_client::{ClientError, Session};
use secrecy::SecretString;
use tracing::info;

use crate::commands::AppContext;
use crate::interactive;

/// Prompted keys are given this many chances before giving up.
pub const MAX_PROMPT_ATTEMPTS: usize = 3;

/// Authenticate `session`.
///
/// A `preset` key (from `--api-key` or `EVALDASH_API_KEY`) gets exactly one
/// validation. Otherwise the operator is prompted, up to
/// [`MAX_PROMPT_ATTEMPTS`] times.
pub async fn login(
    ctx: &AppContext,
    session: &mut Session,
    preset: Option<SecretString>,
    base_url: Option<&str>,
    lines: &mut dyn BufRead,
) -> Result<()> {
    if let Some(key) = preset {
        session.login(&ctx.authenticator, key, base_url).await?;
        info!(base_url = %session.base_url(), "Logged in with preset API key");
        return Ok(());
    }

    let mut attempts = 0;
    loop {
        attempts += 1;
        let key = interactive::prompt_api_key(lines)?
            .ok_or(ClientError::NotAuthenticated)
            .context("No API key provided")?;

        match session.login(&ctx.authenticator, key, base_url).await {
            Ok(()) => {
                eprintln!("Logged in to {}", session.base_url());
                return Ok(());
            }
            Err(e) if attempts < MAX_PROMPT_ATTEMPTS => eprintln!("{e}"),
            Err(e) => return Err(e.into()),
        }
    }
}
