//! Normalisation pass over previously generated community datasets.
//!
//! Base fields (region, industry, organisation, total, saudi, quarterly growth)
//! are authoritative; every derived field is recomputed from them rather than
//! adjusted, which makes the pass idempotent.

use anyhow::{Context, Result};
use rand::Rng;
use serde_json::Value;
use tracing::{info, warn};

use crate::community::generator::random_growth;
use crate::community::models::{average_growth, CommunityRecord, RegionSummary};
use crate::config::DatasetFiles;
use crate::stats::{percentage, round2};
use crate::store::DataStore;

/// Growth used for a region summary that has none.
const DEFAULT_REGION_GROWTH: [f64; 3] = [2.0, 3.0, 4.0];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RepairReport {
    pub records_kept: usize,
    pub records_dropped: usize,
    pub regions_kept: usize,
}

/// Integer view of a JSON field. Floats truncate, strings must hold an integer.
fn as_count(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn count_field(record: &Value, key: &str) -> Option<i64> {
    match record.get(key) {
        None => Some(0),
        Some(v) => as_count(v),
    }
}

fn text_field(record: &Value, key: &str, default: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn growth_field(record: &Value) -> Option<Option<Vec<f64>>> {
    match record.get("growth_trend_q") {
        None => Some(None),
        Some(Value::Array(items)) if !items.is_empty() => items
            .iter()
            .map(|v| as_float(v).map(round2))
            .collect::<Option<Vec<f64>>>()
            .map(Some),
        Some(_) => None,
    }
}

/// Repairs one organisation record. `None` drops it: malformed fields or a
/// non-positive worker total.
pub fn repair_record<R: Rng + ?Sized>(record: &Value, rng: &mut R) -> Option<CommunityRecord> {
    if !record.is_object() {
        return None;
    }

    let total = count_field(record, "total_workers")?;
    let saudi = count_field(record, "saudi_workers")?;
    let growth = growth_field(record)?;

    if total <= 0 {
        return None;
    }
    let total = total as u64;

    let saudi = if saudi < 0 || saudi as u64 > total {
        let share: f64 = rng.gen_range(0.3..=0.8);
        (total as f64 * share).floor() as u64
    } else {
        saudi as u64
    };

    let growth = growth.unwrap_or_else(|| random_growth(rng));

    Some(CommunityRecord::from_base(
        text_field(record, "region", "Unknown"),
        text_field(record, "industry", "General"),
        text_field(record, "organization", "Unknown"),
        total,
        saudi,
        growth,
    ))
}

pub fn repair_records<R: Rng + ?Sized>(records: &[Value], rng: &mut R) -> Vec<CommunityRecord> {
    records
        .iter()
        .filter_map(|record| repair_record(record, rng))
        .collect()
}

/// Recomputes a region rollup. Unlike organisation records, a zero total is
/// kept (with a zero rate); only malformed entries are dropped.
pub fn repair_region(region: &Value) -> Option<RegionSummary> {
    if !region.is_object() {
        return None;
    }

    let total = count_field(region, "total_workers")?.max(0) as u64;
    let saudi = (count_field(region, "saudi_workers")?.max(0) as u64).min(total);
    let growth_trend_q = growth_field(region)?.unwrap_or_else(|| DEFAULT_REGION_GROWTH.to_vec());

    Some(RegionSummary {
        region: text_field(region, "region", "Unknown"),
        total_workers: total,
        saudi_workers: saudi,
        expat_workers: total - saudi,
        saudization_rate: percentage(saudi as f64, total as f64),
        avg_growth_trend: average_growth(&growth_trend_q),
        growth_trend_q,
    })
}

pub fn repair_regions(regions: &[Value]) -> Vec<RegionSummary> {
    regions.iter().filter_map(repair_region).collect()
}

/// Loads both community files, repairs them and writes them back in place.
/// A missing or empty file is reported and left alone.
pub fn run_repair<R: Rng + ?Sized>(
    store: &DataStore,
    files: &DatasetFiles,
    rng: &mut R,
) -> Result<RepairReport> {
    let mut report = RepairReport::default();

    match store
        .load_optional::<Vec<Value>>(&files.community)
        .with_context(|| format!("reading {}", files.community))?
    {
        None => warn!("File not found: {}", store.path_of(&files.community).display()),
        Some(records) if records.is_empty() => {
            warn!("{} is empty, nothing to repair", files.community)
        }
        Some(records) => {
            let repaired = repair_records(&records, rng);
            report.records_kept = repaired.len();
            report.records_dropped = records.len() - repaired.len();
            let path = store
                .save(&files.community, &repaired)
                .context("writing repaired community dataset")?;
            info!(
                "Cleaned and saved {} ({} records, {} dropped)",
                path.display(),
                report.records_kept,
                report.records_dropped
            );
        }
    }

    match store
        .load_optional::<Vec<Value>>(&files.community_regions)
        .with_context(|| format!("reading {}", files.community_regions))?
    {
        None => warn!(
            "File not found: {}",
            store.path_of(&files.community_regions).display()
        ),
        Some(regions) if regions.is_empty() => {
            warn!("{} is empty, nothing to repair", files.community_regions)
        }
        Some(regions) => {
            let repaired = repair_regions(&regions);
            report.regions_kept = repaired.len();
            let path = store
                .save(&files.community_regions, &repaired)
                .context("writing repaired region summary")?;
            info!("Cleaned and saved {} ({} regions)", path.display(), repaired.len());
        }
    }

    Ok(report)
}
