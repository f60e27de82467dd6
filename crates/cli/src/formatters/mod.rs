//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render backend envelopes as human-readable tables or as JSON.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - Missing or null values render as [`PLACEHOLDER`]; list entries missing
//!   their required fields are skipped and counted, never fatal.

mod json;
mod table;

use evaldash_client::Envelope;

use crate::args::OutputFormat;

pub use evaldash_client::format::PLACEHOLDER;

/// Which resource an envelope holds, selecting the table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Hackathons,
    Hackathon,
    Stats,
    JobStatus,
    CostEstimate,
    Leaderboard,
    Scorecard,
}

/// Render `envelope` in the requested output format.
pub fn render(view: View, envelope: &Envelope, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_envelope(envelope),
        OutputFormat::Table => match view {
            View::Hackathons => table::format_hackathons(envelope),
            View::Hackathon => table::format_hackathon(envelope),
            View::Stats => table::format_stats(envelope),
            View::JobStatus => table::format_job_status(envelope),
            View::CostEstimate => table::format_cost_estimate(envelope),
            View::Leaderboard => table::format_leaderboard(envelope),
            View::Scorecard => table::format_scorecard(envelope),
        },
    }
}
