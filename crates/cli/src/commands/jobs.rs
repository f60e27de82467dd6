//! Job status command.
//!
//! Job status changes while an evaluation runs, so it is never cached.

use anyhow::Result;
use evaldash_client::Session;

use crate::commands::AppContext;
use crate::formatters::{View, render};

pub async fn status(ctx: &AppContext, session: &Session, job_id: &str) -> Result<()> {
    let envelope = crate::fetch!(
        ctx,
        session,
        "get job status",
        "Could not load job status",
        |client, s| client.get_job_status(s, job_id)
    )?;

    print!("{}", render(View::JobStatus, &envelope, ctx.output));
    Ok(())
}
