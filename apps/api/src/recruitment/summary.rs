use serde::{Deserialize, Serialize};

use crate::recruitment::models::Decision;
use crate::stats::{most_frequent, percentage};

/// Role reported for candidates without one, and when there are none at all.
pub const DEFAULT_ROLE: &str = "General";

/// The two candidate fields the summary reads. Both accept the legacy names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateOutcome {
    #[serde(default, alias = "result")]
    pub decision: Option<String>,
    #[serde(default, alias = "role_applied")]
    pub position: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecruitmentSummary {
    pub total_candidates: usize,
    pub shortlisted: usize,
    #[serde(rename = "rejection_rate_%")]
    pub rejection_rate: f64,
    pub most_common_role: String,
}

/// Everything not shortlisted counts as a rejection for the rate.
pub fn summarize_recruitment(candidates: &[CandidateOutcome]) -> RecruitmentSummary {
    let total_candidates = candidates.len();
    let shortlisted = candidates
        .iter()
        .filter(|c| c.decision.as_deref() == Some(Decision::Shortlisted.as_str()))
        .count();

    let rejection_rate = percentage(
        (total_candidates - shortlisted) as f64,
        total_candidates as f64,
    );

    let most_common_role = most_frequent(
        candidates
            .iter()
            .map(|c| c.position.as_deref().unwrap_or(DEFAULT_ROLE)),
    )
    .unwrap_or(DEFAULT_ROLE)
    .to_string();

    RecruitmentSummary {
        total_candidates,
        shortlisted,
        rejection_rate,
        most_common_role,
    }
}
