use std::collections::HashMap;

use anyhow::{Context, Result};
use rand::{Rng, RngCore};

use crate::community::models::{average_growth, CommunityRecord, RegionSummary, QUARTERS};
use crate::config::Config;
use crate::mockdata::{vocab, DatasetGenerator, GenerationReport};
use crate::stats::{percentage, round2};
use crate::store::DataStore;

pub const REGIONS: &[&str] = &[
    "Riyadh", "Makkah", "Eastern Province", "Madinah", "Qassim", "Asir", "Tabuk", "Hail",
    "Jazan", "Najran", "Al-Bahah", "Northern Borders", "Al-Jouf",
];

pub const INDUSTRIES: &[&str] = &[
    "Construction", "Healthcare", "Education", "Hospitality", "Finance", "IT & Software",
    "Retail", "Logistics", "Manufacturing", "Energy", "Agriculture", "Tourism", "Government",
];

/// Uniform quarterly growth figures in [1.0, 5.0].
pub fn random_growth<R: Rng + ?Sized>(rng: &mut R) -> Vec<f64> {
    (0..QUARTERS).map(|_| rng.gen_range(1.0..=5.0)).collect()
}

pub fn generate_record<R: Rng + ?Sized>(rng: &mut R) -> CommunityRecord {
    let region = vocab::choose(rng, REGIONS).to_string();
    let industry = vocab::choose(rng, INDUSTRIES).to_string();
    let organization = vocab::company_name(rng);

    let total_workers: u64 = rng.gen_range(500..=10_000);
    let share: f64 = rng.gen_range(0.3..=0.75);
    let saudi_workers = (total_workers as f64 * share).floor() as u64;

    CommunityRecord::from_base(
        region,
        industry,
        organization,
        total_workers,
        saudi_workers,
        random_growth(rng),
    )
}

/// Rolls records up by region, in order of first appearance.
pub fn summarize_regions(records: &[CommunityRecord]) -> Vec<RegionSummary> {
    struct Acc {
        total: u64,
        saudi: u64,
        expat: u64,
        growth_sum: [f64; QUARTERS],
        count: usize,
    }

    let mut order: Vec<&str> = Vec::new();
    let mut acc: HashMap<&str, Acc> = HashMap::new();

    for record in records {
        let entry = acc.entry(record.region.as_str()).or_insert_with(|| {
            order.push(record.region.as_str());
            Acc {
                total: 0,
                saudi: 0,
                expat: 0,
                growth_sum: [0.0; QUARTERS],
                count: 0,
            }
        });
        entry.total += record.total_workers;
        entry.saudi += record.saudi_workers;
        entry.expat += record.expat_workers;
        for (sum, q) in entry.growth_sum.iter_mut().zip(&record.growth_trend_q) {
            *sum += q;
        }
        entry.count += 1;
    }

    order
        .into_iter()
        .filter_map(|region| {
            let a = acc.get(region)?;
            let growth_trend_q: Vec<f64> = a
                .growth_sum
                .iter()
                .map(|sum| round2(sum / a.count as f64))
                .collect();
            Some(RegionSummary {
                region: region.to_string(),
                total_workers: a.total,
                saudi_workers: a.saudi,
                expat_workers: a.expat,
                saudization_rate: percentage(a.saudi as f64, a.total as f64),
                avg_growth_trend: average_growth(&growth_trend_q),
                growth_trend_q,
            })
        })
        .collect()
}

pub struct CommunityGenerator {
    records: usize,
    output: String,
    region_output: String,
}

impl CommunityGenerator {
    pub fn from_config(config: &Config) -> Self {
        Self {
            records: config.sizes.community_records,
            output: config.files.community.clone(),
            region_output: config.files.community_regions.clone(),
        }
    }
}

impl DatasetGenerator for CommunityGenerator {
    fn name(&self) -> &'static str {
        "community"
    }

    fn generate(&self, store: &DataStore, rng: &mut dyn RngCore) -> Result<GenerationReport> {
        let records: Vec<CommunityRecord> = (0..self.records).map(|_| generate_record(rng)).collect();
        let regions = summarize_regions(&records);

        let data_path = store
            .save(&self.output, &records)
            .context("writing community dataset")?;
        let summary_path = store
            .save(&self.region_output, &regions)
            .context("writing community region summary")?;

        Ok(GenerationReport {
            records: records.len(),
            outputs: vec![data_path, summary_path],
        })
    }
}
