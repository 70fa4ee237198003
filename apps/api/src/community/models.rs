use serde::{Deserialize, Serialize};

use crate::stats::{percentage, round2};

pub const QUARTERS: usize = 3;

/// One organisation in a region. Counts satisfy `saudi + expat == total`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommunityRecord {
    pub region: String,
    pub industry: String,
    pub organization: String,
    pub total_workers: u64,
    pub saudi_workers: u64,
    pub expat_workers: u64,
    pub saudization_rate: f64,
    pub growth_trend_q: Vec<f64>,
    pub avg_growth_trend: f64,
}

impl CommunityRecord {
    /// Derives expat count, saudization rate and average growth from the base fields.
    /// `saudi_workers` must already be clamped to `total_workers`.
    pub fn from_base(
        region: String,
        industry: String,
        organization: String,
        total_workers: u64,
        saudi_workers: u64,
        growth_trend_q: Vec<f64>,
    ) -> Self {
        let growth_trend_q: Vec<f64> = growth_trend_q.into_iter().map(round2).collect();
        let avg_growth_trend = average_growth(&growth_trend_q);
        Self {
            region,
            industry,
            organization,
            total_workers,
            saudi_workers,
            expat_workers: total_workers - saudi_workers,
            saudization_rate: percentage(saudi_workers as f64, total_workers as f64),
            growth_trend_q,
            avg_growth_trend,
        }
    }
}

/// Per-region rollup written next to the record file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionSummary {
    pub region: String,
    pub total_workers: u64,
    pub saudi_workers: u64,
    pub expat_workers: u64,
    pub saudization_rate: f64,
    pub growth_trend_q: Vec<f64>,
    pub avg_growth_trend: f64,
}

pub fn average_growth(growth_trend_q: &[f64]) -> f64 {
    crate::stats::mean(growth_trend_q.iter().copied())
        .map(round2)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base_derives_fields() {
        let r = CommunityRecord::from_base(
            "Hail".into(),
            "Energy".into(),
            "Desert Star Group".into(),
            1000,
            333,
            vec![1.234, 2.0, 3.0],
        );
        assert_eq!(r.expat_workers, 667);
        assert_eq!(r.saudization_rate, 33.3);
        assert_eq!(r.growth_trend_q, vec![1.23, 2.0, 3.0]);
        assert_eq!(r.avg_growth_trend, 2.08);
    }
}
