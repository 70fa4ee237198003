use serde::{Deserialize, Serialize};

use crate::stats::{mean, round2};

/// Scores strictly above this mark count as high performers.
pub const HIGH_PERFORMER_THRESHOLD: f64 = 85.0;

/// The only employee field the aggregates read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeScore {
    #[serde(default)]
    pub overall_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceSummary {
    pub total_employees: usize,
    #[serde(rename = "average_performance_%")]
    pub average_performance: f64,
    pub high_performers: usize,
}

/// Records without an overall score are ignored by both figures.
pub fn summarize_performance(records: &[EmployeeScore]) -> PerformanceSummary {
    let scores: Vec<f64> = records.iter().filter_map(|r| r.overall_score).collect();

    PerformanceSummary {
        total_employees: records.len(),
        average_performance: mean(scores.iter().copied()).map(round2).unwrap_or(0.0),
        high_performers: scores
            .iter()
            .filter(|s| **s > HIGH_PERFORMER_THRESHOLD)
            .count(),
    }
}
