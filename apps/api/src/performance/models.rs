use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Recommendation {
    Yes,
    No,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub employee_id: String,
    pub name: String,
    pub arabic_name: String,
    pub company: String,
    pub department: String,
    pub attendance_score: u32,
    pub productivity_score: u32,
    pub teamwork_score: u32,
    pub learning_score: u32,
    /// Mean of the four sub-scores; `null` when it was never computed.
    #[serde(default)]
    pub overall_score: Option<f64>,
    pub ai_feedback_en: String,
    pub ai_feedback_ar: String,
    pub promotion_recommendation: Recommendation,
    #[serde(rename = "salary_increase_%")]
    pub salary_increase: u32,
    pub year: u16,
}

/// Arithmetic mean of the four sub-scores, rounded to 2 decimals.
pub fn overall_score(attendance: u32, productivity: u32, teamwork: u32, learning: u32) -> f64 {
    crate::stats::round2((attendance + productivity + teamwork + learning) as f64 / 4.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_is_plain_mean() {
        assert_eq!(overall_score(60, 70, 80, 91), 75.25);
        assert_eq!(overall_score(100, 100, 100, 100), 100.0);
    }
}
