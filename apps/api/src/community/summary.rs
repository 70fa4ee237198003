use std::collections::HashSet;

use serde::Deserialize;

use crate::stats::most_frequent;

/// Region reported when no record names one.
pub const DEFAULT_REGION: &str = "Riyadh";

/// Region field of a community record. Reading only this keeps the
/// aggregation working on datasets that still need the repair pass.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionTag {
    #[serde(default)]
    pub region: Option<String>,
}

/// Regions that actually appear, ignoring missing or blank fields.
fn named_regions<'a>(records: &'a [RegionTag]) -> impl Iterator<Item = &'a str> + 'a {
    records
        .iter()
        .filter_map(|r| r.region.as_deref())
        .filter(|region| !region.trim().is_empty())
}

/// Region with the most organisations; ties go to the one listed first.
pub fn top_region(records: &[RegionTag]) -> String {
    most_frequent(named_regions(records))
        .unwrap_or(DEFAULT_REGION)
        .to_string()
}

pub fn distinct_region_count(records: &[RegionTag]) -> usize {
    named_regions(records).collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_tag(region: Option<&str>) -> RegionTag {
        RegionTag {
            region: region.map(str::to_string),
        }
    }

    #[test]
    fn test_top_region_ignores_blank_regions() {
        let records: Vec<_> = [Some(""), None, Some(""), Some("Tabuk"), Some("Hail"), Some("Hail")]
            .into_iter()
            .map(make_tag)
            .collect();
        assert_eq!(top_region(&records), "Hail");
        assert_eq!(distinct_region_count(&records), 2);
    }

    #[test]
    fn test_top_region_defaults_to_riyadh() {
        assert_eq!(top_region(&[]), DEFAULT_REGION);
        assert_eq!(top_region(&[make_tag(None)]), DEFAULT_REGION);
    }

    #[test]
    fn test_reads_region_from_full_record() {
        let raw = serde_json::json!([
            {"region": "Asir", "total_workers": 10, "saudi_workers": 40},
            {"organization": "no region here"},
            {"region": "Asir"}
        ]);
        let tags: Vec<RegionTag> = serde_json::from_value(raw).unwrap();
        assert_eq!(top_region(&tags), "Asir");
    }
}
