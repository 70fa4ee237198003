use serde::{Deserialize, Serialize};

use crate::stats::{mean, percentage, round2};

/// The slice of a workforce record the aggregates read. Every field is
/// optional so hand-edited or partial files still summarize.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyHeadcount {
    #[serde(default)]
    pub total_workers: Option<u64>,
    #[serde(default)]
    pub saudi_workers: Option<u64>,
    #[serde(default, rename = "saudization_%", alias = "saudization_rate")]
    pub saudization: Option<f64>,
}

impl CompanyHeadcount {
    fn total(&self) -> u64 {
        self.total_workers.unwrap_or(0)
    }

    fn saudi(&self) -> u64 {
        self.saudi_workers.unwrap_or(0)
    }

    /// Stored percentage, or the one implied by the head counts.
    fn saudization(&self) -> f64 {
        self.saudization
            .unwrap_or_else(|| percentage(self.saudi() as f64, self.total() as f64))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkforceSummary {
    pub total_employees: u64,
    /// Pooled rate: all Saudi workers over all workers.
    pub saudization_rate: f64,
    /// Unweighted mean of the per-company saudization percentages.
    pub organization_avg_saudization: f64,
}

pub fn summarize_workforce(records: &[CompanyHeadcount]) -> WorkforceSummary {
    let total_employees: u64 = records.iter().map(CompanyHeadcount::total).sum();
    let total_saudi: u64 = records.iter().map(CompanyHeadcount::saudi).sum();

    WorkforceSummary {
        total_employees,
        saudization_rate: percentage(total_saudi as f64, total_employees as f64),
        organization_avg_saudization: average_saudization(records),
    }
}

/// Mean company saudization percentage, 0 for no companies.
pub fn average_saudization(records: &[CompanyHeadcount]) -> f64 {
    mean(records.iter().map(CompanyHeadcount::saudization))
        .map(round2)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workforce::models::CompanyWorkforceRecord;

    fn make_company(total: u64, saudi: u64) -> CompanyHeadcount {
        CompanyHeadcount {
            total_workers: Some(total),
            saudi_workers: Some(saudi),
            saudization: None,
        }
    }

    #[test]
    fn test_pooled_saudization_rate() {
        let records = vec![make_company(100, 50), make_company(200, 100)];
        let summary = summarize_workforce(&records);
        assert_eq!(summary.total_employees, 300);
        assert_eq!(summary.saudization_rate, 50.0);
    }

    #[test]
    fn test_pooled_differs_from_average() {
        let records = vec![make_company(100, 90), make_company(900, 90)];
        let summary = summarize_workforce(&records);
        assert_eq!(summary.saudization_rate, 18.0);
        assert_eq!(summary.organization_avg_saudization, 50.0);
    }

    #[test]
    fn test_stored_percentage_wins_over_counts() {
        let mut record = make_company(100, 50);
        record.saudization = Some(70.0);
        assert_eq!(average_saudization(&[record]), 70.0);
    }

    #[test]
    fn test_reads_generated_records() {
        let generated = CompanyWorkforceRecord::new("A".into(), "Abha".into(), 200, 35, 1.5);
        let value = serde_json::to_value(&generated).unwrap();
        let view: CompanyHeadcount = serde_json::from_value(value).unwrap();
        assert_eq!(view.saudi(), 70);
        assert_eq!(view.saudization(), 35.0);
    }

    #[test]
    fn test_missing_fields_count_as_zero() {
        let records: Vec<CompanyHeadcount> =
            serde_json::from_str(r#"[{"company": "X"}, {"total_workers": 40, "saudi_workers": 10}]"#)
                .unwrap();
        let summary = summarize_workforce(&records);
        assert_eq!(summary.total_employees, 40);
        assert_eq!(summary.saudization_rate, 25.0);
        assert_eq!(summary.organization_avg_saudization, 12.5);
    }

    #[test]
    fn test_empty_is_zero() {
        let summary = summarize_workforce(&[]);
        assert_eq!(summary.total_employees, 0);
        assert_eq!(summary.saudization_rate, 0.0);
        assert_eq!(summary.organization_avg_saudization, 0.0);
    }
}
