//! Submission scorecard command.

use anyhow::Result;
use evaldash_client::Session;

use crate::commands::AppContext;
use crate::formatters::{View, render};

pub async fn scorecard(ctx: &AppContext, session: &mut Session, submission_id: &str) -> Result<()> {
    let key = format!("scorecard/{submission_id}");
    let envelope = match session.cached_envelope(&key).cloned() {
        Some(envelope) => envelope,
        None => {
            let envelope = crate::fetch!(
                ctx,
                session,
                "get scorecard",
                "Could not load scorecard",
                |client, s| client.get_scorecard(s, submission_id)
            )?;
            session.cache_envelope(key, envelope.clone());
            envelope
        }
    };

    print!("{}", render(View::Scorecard, &envelope, ctx.output));
    Ok(())
}
