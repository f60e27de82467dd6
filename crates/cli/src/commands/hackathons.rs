//! Hackathon commands: list, show, stats, estimate and leaderboard.
//!
//! Read-only views are cached in the session; `estimate` always hits the
//! backend.

use anyhow::Result;
use evaldash_client::{Envelope, Session};
use serde_json::json;

use crate::commands::AppContext;
use crate::formatters::{View, render};

pub async fn list(ctx: &AppContext, session: &mut Session) -> Result<()> {
    let key = "hackathons";
    let envelope = match session.cached_envelope(key).cloned() {
        Some(envelope) => envelope,
        None => {
            let envelope = crate::fetch!(
                ctx,
                session,
                "list hackathons",
                "Could not load hackathons",
                |client, s| client.list_hackathons(s)
            )?;
            session.cache_envelope(key, envelope.clone());
            envelope
        }
    };

    print!("{}", render(View::Hackathons, &envelope, ctx.output));
    Ok(())
}

pub async fn show(ctx: &AppContext, session: &mut Session, hackathon_id: &str) -> Result<()> {
    let key = format!("hackathon/{hackathon_id}");
    let envelope = match session.cached_envelope(&key).cloned() {
        Some(envelope) => envelope,
        None => {
            let envelope = crate::fetch!(
                ctx,
                session,
                "get hackathon",
                "Could not load hackathon",
                |client, s| client.get_hackathon(s, hackathon_id)
            )?;
            session.cache_envelope(key, envelope.clone());
            envelope
        }
    };

    print!("{}", render(View::Hackathon, &envelope, ctx.output));
    Ok(())
}

pub async fn stats(ctx: &AppContext, session: &mut Session, hackathon_id: &str) -> Result<()> {
    let key = format!("stats/{hackathon_id}");
    let envelope = match session.cached_envelope(&key).cloned() {
        Some(envelope) => envelope,
        None => {
            let envelope = crate::fetch!(
                ctx,
                session,
                "get stats",
                "Could not load statistics",
                |client, s| client.get_stats(s, hackathon_id)
            )?;
            session.cache_envelope(key, envelope.clone());
            envelope
        }
    };

    print!("{}", render(View::Stats, &envelope, ctx.output));
    Ok(())
}

/// Request body for a cost estimate; no agents means "all agents".
pub fn estimate_body(agents: &[String]) -> Envelope {
    if agents.is_empty() {
        json!({})
    } else {
        json!({ "agents": agents })
    }
}

pub async fn estimate(
    ctx: &AppContext,
    session: &mut Session,
    hackathon_id: &str,
    agents: &[String],
) -> Result<()> {
    let body = estimate_body(agents);
    let body = &body;
    let envelope = crate::fetch!(
        ctx,
        session,
        "estimate cost",
        "Could not estimate cost",
        |client, s| client.estimate_cost(s, hackathon_id, body)
    )?;

    print!("{}", render(View::CostEstimate, &envelope, ctx.output));
    Ok(())
}

pub async fn leaderboard(
    ctx: &AppContext,
    session: &mut Session,
    hackathon_id: &str,
) -> Result<()> {
    let key = format!("leaderboard/{hackathon_id}");
    let envelope = match session.cached_envelope(&key).cloned() {
        Some(envelope) => envelope,
        None => {
            let envelope = crate::fetch!(
                ctx,
                session,
                "get leaderboard",
                "Could not load leaderboard",
                |client, s| client.get_leaderboard(s, hackathon_id)
            )?;
            session.cache_envelope(key, envelope.clone());
            envelope
        }
    };

    print!("{}", render(View::Leaderboard, &envelope, ctx.output));
    Ok(())
}
