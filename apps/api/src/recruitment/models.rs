use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Decision {
    Shortlisted,
    Waitlisted,
    Rejected,
}

impl Decision {
    /// ≥ 80 Shortlisted, ≥ 65 Waitlisted, otherwise Rejected.
    pub fn from_overall(overall: f64) -> Self {
        if overall >= 80.0 {
            Decision::Shortlisted
        } else if overall >= 65.0 {
            Decision::Waitlisted
        } else {
            Decision::Rejected
        }
    }

    /// Label as stored on disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Shortlisted => "Shortlisted",
            Decision::Waitlisted => "Waitlisted",
            Decision::Rejected => "Rejected",
        }
    }
}

/// Weights applied to the four interview sub-scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub technical: f64,
    pub communication: f64,
    pub attitude: f64,
    pub teamwork: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            technical: 0.3,
            communication: 0.25,
            attitude: 0.25,
            teamwork: 0.2,
        }
    }
}

impl ScoreWeights {
    /// Weighted overall score, rounded to 2 decimals.
    pub fn overall(&self, technical: u32, communication: u32, attitude: u32, teamwork: u32) -> f64 {
        crate::stats::round2(
            self.technical * technical as f64
                + self.communication * communication as f64
                + self.attitude * attitude as f64
                + self.teamwork * teamwork as f64,
        )
    }
}

/// One synthesised applicant. Never mutated after generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: u32,
    pub name: String,
    pub arabic_name: String,
    #[serde(alias = "role_applied")]
    pub position: String,
    pub experience_years: u32,
    pub skills: Vec<String>,
    pub technical_score: u32,
    pub communication_score: u32,
    pub attitude_score: u32,
    pub teamwork_score: u32,
    pub ai_overall_score: f64,
    pub ai_feedback_en: String,
    pub ai_feedback_ar: String,
    #[serde(alias = "result")]
    pub decision: Decision,
    pub fraud_flag: bool,
}
