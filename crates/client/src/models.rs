//! Data model for backend responses.
//!
//! Responses are kept as untyped envelopes. [`ResourceKind`] names the
//! logical resource types the dashboard recognizes and the fields that must
//! be present before a response is treated as one of them.

use serde_json::Value;

use crate::validator::has_required_fields;

/// A structured, loosely-typed payload returned by the backend.
pub type Envelope = Value;

/// Logical resource types served by the evaluation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Hackathon,
    Stats,
    JobStatus,
    CostEstimate,
    Scorecard,
    Leaderboard,
}

impl ResourceKind {
    /// Direct keys a response must carry to be treated as this resource.
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Hackathon => &["id", "name"],
            Self::Stats => &["total_submissions"],
            Self::JobStatus => &["job_id", "status"],
            Self::CostEstimate => &["estimated_cost_usd"],
            Self::Scorecard => &["submission_id", "overall_score"],
            Self::Leaderboard => &["hackathon_id", "entries"],
        }
    }

    /// Human-readable resource name used in logs and messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hackathon => "hackathon",
            Self::Stats => "stats",
            Self::JobStatus => "job status",
            Self::CostEstimate => "cost estimate",
            Self::Scorecard => "scorecard",
            Self::Leaderboard => "leaderboard",
        }
    }

    /// Whether `response` carries every required field of this resource.
    pub fn matches(self, response: &Envelope) -> bool {
        has_required_fields(response, self.required_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scorecard_matches() {
        let scorecard = json!({"submission_id": "s1", "overall_score": 8.5});
        assert!(ResourceKind::Scorecard.matches(&scorecard));
        assert!(!ResourceKind::Leaderboard.matches(&scorecard));
    }

    #[test]
    fn test_leaderboard_requires_entries() {
        let partial = json!({"hackathon_id": "h1"});
        assert!(!ResourceKind::Leaderboard.matches(&partial));
    }

    #[test]
    fn test_every_kind_has_required_fields() {
        for kind in [
            ResourceKind::Hackathon,
            ResourceKind::Stats,
            ResourceKind::JobStatus,
            ResourceKind::CostEstimate,
            ResourceKind::Scorecard,
            ResourceKind::Leaderboard,
        ] {
            assert!(!kind.required_fields().is_empty(), "{}", kind.as_str());
        }
    }
}
