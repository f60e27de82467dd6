//! Table formatters for evaluation resources.
//!
//! Every accessor goes through the response validator, so partially
//! populated envelopes still render with placeholders.

use evaldash_client::format::{
    PLACEHOLDER, display_or_placeholder, format_currency, format_duration_secs, format_percentage,
    format_timestamp,
};
use evaldash_client::validator::{nested_array, nested_str, safe_get, safe_get_nested};
use evaldash_client::{Envelope, ResourceKind};
use serde_json::Value;

static MISSING: Value = Value::Null;

fn field(envelope: &Envelope, key: &str) -> String {
    display_or_placeholder(safe_get(envelope, key, &MISSING))
}

fn money(envelope: &Envelope, path: &[&str]) -> String {
    match safe_get_nested(envelope, path, &MISSING) {
        Value::Number(n) => n.as_f64().map_or(PLACEHOLDER.to_string(), format_currency),
        _ => PLACEHOLDER.to_string(),
    }
}

fn timestamp(envelope: &Envelope, key: &str) -> String {
    match nested_str(envelope, &[key], "") {
        "" => PLACEHOLDER.to_string(),
        raw => format_timestamp(raw),
    }
}

fn incomplete_notice(output: &mut String, kind: ResourceKind, envelope: &Envelope) {
    if !kind.matches(envelope) {
        output.push_str(&format!(
            "Note: incomplete {} response; missing values are shown as {PLACEHOLDER}.\n",
            kind.as_str(),
        ));
    }
}

fn skipped_notice(output: &mut String, skipped: usize) {
    if skipped > 0 {
        let noun = if skipped == 1 { "entry" } else { "entries" };
        output.push_str(&format!("({skipped} {noun} skipped: missing required fields)\n"));
    }
}

/// Hackathons accept either a bare array or `{"hackathons": [...]}`.
fn hackathon_items(envelope: &Envelope) -> &[Value] {
    match envelope {
        Value::Array(items) => items.as_slice(),
        _ => nested_array(envelope, &["hackathons"]),
    }
}

pub fn format_hackathons(envelope: &Envelope) -> String {
    let items = hackathon_items(envelope);
    if items.is_empty() {
        return "No hackathons found.\n".to_string();
    }

    let mut output = String::from("ID\tName\tStatus\tSubmissions\tCreated\n");
    let mut skipped = 0;
    for item in items {
        if !ResourceKind::Hackathon.matches(item) {
            skipped += 1;
            continue;
        }
        output.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            field(item, "id"),
            field(item, "name"),
            field(item, "status"),
            field(item, "submission_count"),
            timestamp(item, "created_at"),
        ));
    }
    skipped_notice(&mut output, skipped);
    output
}

pub fn format_hackathon(envelope: &Envelope) -> String {
    let mut output = String::new();
    incomplete_notice(&mut output, ResourceKind::Hackathon, envelope);

    output.push_str("--- Hackathon ---\n");
    output.push_str(&format!("ID: {}\n", field(envelope, "id")));
    output.push_str(&format!("Name: {}\n", field(envelope, "name")));
    output.push_str(&format!("Status: {}\n", field(envelope, "status")));
    output.push_str(&format!("Description: {}\n", field(envelope, "description")));
    output.push_str(&format!("Submissions: {}\n", field(envelope, "submission_count")));
    output.push_str(&format!("Created: {}\n", timestamp(envelope, "created_at")));
    output
}

pub fn format_stats(envelope: &Envelope) -> String {
    let mut output = String::new();
    incomplete_notice(&mut output, ResourceKind::Stats, envelope);

    output.push_str("--- Statistics ---\n");
    output.push_str(&format!("Total submissions: {}\n", field(envelope, "total_submissions")));
    output.push_str(&format!("Evaluated: {}\n", field(envelope, "evaluated")));
    output.push_str(&format!("Pending: {}\n", field(envelope, "pending")));
    output.push_str(&format!("Failed: {}\n", field(envelope, "failed")));
    output.push_str(&format!("Average score: {}\n", field(envelope, "average_score")));
    output.push_str(&format!("Total cost: {}\n", money(envelope, &["total_cost_usd"])));

    if let Some(agents) = safe_get(envelope, "agent_results", &MISSING).as_object() {
        if !agents.is_empty() {
            output.push_str("\nAgent\tCost\n");
            for name in agents.keys() {
                output.push_str(&format!(
                    "{name}\t{}\n",
                    money(envelope, &["agent_results", name.as_str(), "cost_usd"]),
                ));
            }
        }
    }
    output
}

pub fn format_job_status(envelope: &Envelope) -> String {
    let mut output = String::new();
    incomplete_notice(&mut output, ResourceKind::JobStatus, envelope);

    let progress = match safe_get(envelope, "progress", &MISSING) {
        Value::Number(n) => n.as_f64().map_or(PLACEHOLDER.to_string(), format_percentage),
        _ => PLACEHOLDER.to_string(),
    };
    let elapsed = match safe_get(envelope, "elapsed_seconds", &MISSING) {
        Value::Number(n) => n
            .as_f64()
            .map_or(PLACEHOLDER.to_string(), format_duration_secs),
        _ => PLACEHOLDER.to_string(),
    };

    output.push_str("--- Job ---\n");
    output.push_str(&format!("Job ID: {}\n", field(envelope, "job_id")));
    output.push_str(&format!("Hackathon: {}\n", field(envelope, "hackathon_id")));
    output.push_str(&format!("Status: {}\n", field(envelope, "status")));
    output.push_str(&format!("Progress: {progress}\n"));
    output.push_str(&format!("Elapsed: {elapsed}\n"));
    output.push_str(&format!("Started: {}\n", timestamp(envelope, "started_at")));
    output.push_str(&format!("Completed: {}\n", timestamp(envelope, "completed_at")));
    output
}

pub fn format_cost_estimate(envelope: &Envelope) -> String {
    let mut output = String::new();
    incomplete_notice(&mut output, ResourceKind::CostEstimate, envelope);

    let duration = match safe_get(envelope, "estimated_duration_seconds", &MISSING) {
        Value::Number(n) => n
            .as_f64()
            .map_or(PLACEHOLDER.to_string(), format_duration_secs),
        _ => PLACEHOLDER.to_string(),
    };

    output.push_str("--- Cost Estimate ---\n");
    output.push_str(&format!("Hackathon: {}\n", field(envelope, "hackathon_id")));
    output.push_str(&format!("Submissions: {}\n", field(envelope, "submission_count")));
    output.push_str(&format!(
        "Estimated cost: {}\n",
        money(envelope, &["estimated_cost_usd"])
    ));
    output.push_str(&format!("Estimated duration: {duration}\n"));

    if let Some(breakdown) = safe_get(envelope, "breakdown", &MISSING).as_object() {
        if !breakdown.is_empty() {
            output.push_str("\nAgent\tCost\n");
            for name in breakdown.keys() {
                let cost = money(envelope, &["breakdown", name.as_str()]);
                output.push_str(&format!("{name}\t{cost}\n"));
            }
        }
    }
    output
}

pub fn format_leaderboard(envelope: &Envelope) -> String {
    let mut output = String::new();
    incomplete_notice(&mut output, ResourceKind::Leaderboard, envelope);

    let entries = nested_array(envelope, &["entries"]);
    if entries.is_empty() {
        output.push_str("No leaderboard entries.\n");
        return output;
    }

    output.push_str("Rank\tTeam\tSubmission\tScore\n");
    let mut skipped = 0;
    for entry in entries {
        if !entry.is_object() {
            skipped += 1;
            continue;
        }
        output.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            field(entry, "rank"),
            field(entry, "team_name"),
            field(entry, "submission_id"),
            field(entry, "overall_score"),
        ));
    }
    skipped_notice(&mut output, skipped);
    output
}

pub fn format_scorecard(envelope: &Envelope) -> String {
    let mut output = String::new();
    incomplete_notice(&mut output, ResourceKind::Scorecard, envelope);

    output.push_str("--- Scorecard ---\n");
    output.push_str(&format!("Submission: {}\n", field(envelope, "submission_id")));
    output.push_str(&format!("Team: {}\n", field(envelope, "team_name")));
    output.push_str(&format!("Overall score: {}\n", field(envelope, "overall_score")));
    output.push_str(&format!("Evaluated: {}\n", timestamp(envelope, "evaluated_at")));

    if let Some(agents) = safe_get(envelope, "agent_results", &MISSING).as_object() {
        if !agents.is_empty() {
            output.push_str("\nAgent\tScore\tCost\tSummary\n");
            for name in agents.keys() {
                output.push_str(&format!(
                    "{name}\t{}\t{}\t{}\n",
                    display_or_placeholder(safe_get_nested(
                        envelope,
                        &["agent_results", name.as_str(), "score"],
                        &MISSING
                    )),
                    money(envelope, &["agent_results", name.as_str(), "cost_usd"]),
                    display_or_placeholder(safe_get_nested(
                        envelope,
                        &["agent_results", name.as_str(), "summary"],
                        &MISSING
                    )),
                ));
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hackathons_skip_incomplete_entries() {
        let envelope = json!([
            {"id": "h1", "name": "Spring", "status": "open", "created_at": "2025-03-01T09:00:00Z"},
            {"id": "h2"}
        ]);
        let output = format_hackathons(&envelope);
        assert!(output.contains("h1\tSpring\topen\t—\t2025-03-01 09:00"));
        assert!(!output.contains("h2"));
        assert!(output.contains("(1 entry skipped: missing required fields)"));
    }

    #[test]
    fn test_hackathons_wrapped_list() {
        let envelope = json!({"hackathons": [{"id": "h1", "name": "Spring"}]});
        assert!(format_hackathons(&envelope).contains("h1\tSpring"));
    }

    #[test]
    fn test_hackathons_empty() {
        assert_eq!(format_hackathons(&json!([])), "No hackathons found.\n");
        assert_eq!(format_hackathons(&json!({})), "No hackathons found.\n");
    }

    #[test]
    fn test_hackathon_detail_exact_output() {
        let envelope = json!({
            "id": "h1",
            "name": "Spring",
            "status": "open",
            "submission_count": 3,
            "created_at": "2025-03-01T09:00:00Z"
        });
        assert_eq!(
            format_hackathon(&envelope),
            "--- Hackathon ---\n\
             ID: h1\n\
             Name: Spring\n\
             Status: open\n\
             Description: —\n\
             Submissions: 3\n\
             Created: 2025-03-01 09:00\n"
        );
    }

    #[test]
    fn test_stats_agent_costs() {
        let envelope = json!({
            "total_submissions": 3,
            "agent_results": {"bug_hunter": {"cost_usd": 0.002}, "broken": {}}
        });
        let output = format_stats(&envelope);
        assert!(output.contains("Total submissions: 3"));
        assert!(output.contains("bug_hunter\t$0.0020"));
        assert!(output.contains("broken\t—"));
        assert!(!output.contains("Note:"));
    }

    #[test]
    fn test_incomplete_single_resource_renders_placeholders() {
        let output = format_scorecard(&json!({"team_name": "Null Pointers"}));
        assert!(output.starts_with("Note: incomplete scorecard response"));
        assert!(output.contains("Team: Null Pointers"));
        assert!(output.contains("Overall score: —"));
    }

    #[test]
    fn test_non_object_envelope_does_not_panic() {
        for envelope in [json!(null), json!("text"), json!(42), json!([1, 2])] {
            let _ = format_hackathon(&envelope);
            let _ = format_stats(&envelope);
            let _ = format_job_status(&envelope);
            let _ = format_cost_estimate(&envelope);
            let _ = format_leaderboard(&envelope);
            let _ = format_scorecard(&envelope);
        }
    }

    #[test]
    fn test_job_status_progress_and_elapsed() {
        let envelope = json!({
            "job_id": "job-1",
            "status": "running",
            "progress": 0.625,
            "elapsed_seconds": 125.4,
            "completed_at": null
        });
        let output = format_job_status(&envelope);
        assert!(output.contains("Progress: 62.5%"));
        assert!(output.contains("Elapsed: 2m 05s"));
        assert!(output.contains("Completed: —"));
    }

    #[test]
    fn test_leaderboard_null_score() {
        let envelope = json!({
            "hackathon_id": "h1",
            "entries": [{"rank": 1, "submission_id": "s1", "overall_score": null}]
        });
        assert!(format_leaderboard(&envelope).contains("1\t—\ts1\t—"));
    }
}
