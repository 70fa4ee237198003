use serde::{Deserialize, Serialize};

/// Nitaqat-style band derived from a company's saudization percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SaudizationCategory {
    Platinum,
    Green,
    Yellow,
    Red,
}

impl SaudizationCategory {
    /// > 70 Platinum, > 50 Green, > 30 Yellow, otherwise Red.
    pub fn from_percentage(saudization: f64) -> Self {
        if saudization > 70.0 {
            SaudizationCategory::Platinum
        } else if saudization > 50.0 {
            SaudizationCategory::Green
        } else if saudization > 30.0 {
            SaudizationCategory::Yellow
        } else {
            SaudizationCategory::Red
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyWorkforceRecord {
    pub company: String,
    pub region: String,
    pub total_workers: u64,
    pub saudi_workers: u64,
    pub expat_workers: u64,
    /// Whole-number percentage.
    #[serde(rename = "saudization_%", alias = "saudization_rate")]
    pub saudization: u32,
    pub category: SaudizationCategory,
    pub growth: f64,
}

impl CompanyWorkforceRecord {
    /// Builds a record from its base fields; expat count and category are derived.
    pub fn new(
        company: String,
        region: String,
        total_workers: u64,
        saudization: u32,
        growth: f64,
    ) -> Self {
        let saudi_workers = (total_workers * u64::from(saudization) / 100).min(total_workers);
        Self {
            company,
            region,
            total_workers,
            saudi_workers,
            expat_workers: total_workers - saudi_workers,
            saudization,
            category: SaudizationCategory::from_percentage(f64::from(saudization)),
            growth,
        }
    }
}
