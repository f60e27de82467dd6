//! Command dispatch logic.
//!
//! Responsibilities:
//! - Authenticate the session before any data command runs.
//! - Route parsed CLI arguments to the appropriate command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - No request other than key validation is sent before login succeeds.
//! - The session is logged out before returning, whatever the outcome.

use std::io::BufRead;

use anyhow::Result;
use evaldash_client::Session;
use secrecy::SecretString;

use crate::args::Commands;
use crate::commands::{self, AppContext};
use crate::login;

/// Log in, then run `command` against the authenticated session.
pub(crate) async fn run_command(
    command: Commands,
    ctx: &AppContext,
    session: &mut Session,
    api_key: Option<SecretString>,
    base_url: Option<&str>,
    lines: &mut dyn BufRead,
) -> Result<()> {
    login::login(ctx, session, api_key, base_url, lines).await?;

    let result = match command {
        Commands::Hackathons => commands::hackathons::list(ctx, session).await,
        Commands::Hackathon { id } => commands::hackathons::show(ctx, session, &id).await,
        Commands::Stats { hackathon_id } => {
            commands::hackathons::stats(ctx, session, &hackathon_id).await
        }
        Commands::Job { job_id } => commands::jobs::status(ctx, session, &job_id).await,
        Commands::Estimate {
            hackathon_id,
            agents,
        } => commands::hackathons::estimate(ctx, session, &hackathon_id, &agents).await,
        Commands::Leaderboard { hackathon_id } => {
            commands::hackathons::leaderboard(ctx, session, &hackathon_id).await
        }
        Commands::Scorecard { submission_id } => {
            commands::submissions::scorecard(ctx, session, &submission_id).await
        }
        Commands::Shell => commands::shell::run(ctx, session, lines).await,
    };

    session.logout();
    result
}
