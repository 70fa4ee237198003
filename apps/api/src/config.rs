use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every value has a default, so a bare checkout serves `./mock_data`.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub files: DatasetFiles,
    pub sizes: GeneratorSizes,
    pub port: u16,
    pub rust_log: String,
    /// Seed for response flavor text. `None` draws from OS entropy.
    pub insight_seed: Option<u64>,
}

/// File names of every persisted dataset, relative to `Config::data_dir`.
#[derive(Debug, Clone)]
pub struct DatasetFiles {
    pub recruitment: String,
    pub workforce: String,
    pub company_list: String,
    pub performance: String,
    pub community: String,
    pub community_regions: String,
    pub fraud: String,
    pub insights: String,
}

impl Default for DatasetFiles {
    fn default() -> Self {
        Self {
            recruitment: "recruitment_data.json".to_string(),
            workforce: "workforce_data.json".to_string(),
            company_list: "company_list.json".to_string(),
            performance: "performance_data.json".to_string(),
            community: "community_data.json".to_string(),
            community_regions: "community_region_summary.json".to_string(),
            fraud: "fraud_events.json".to_string(),
            insights: "insights_data.json".to_string(),
        }
    }
}

/// Record counts used by the dataset generators.
#[derive(Debug, Clone)]
pub struct GeneratorSizes {
    pub candidates: usize,
    pub roles: usize,
    pub companies: usize,
    pub employees: usize,
    pub community_records: usize,
    pub fraud_events: usize,
    pub insights: usize,
}

impl Default for GeneratorSizes {
    fn default() -> Self {
        Self {
            candidates: 10_000,
            roles: 500,
            companies: 500,
            employees: 10_000,
            community_records: 10_000,
            fraud_events: 6_000,
            insights: 3_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let insight_seed = match std::env::var("INSIGHT_SEED") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .context("INSIGHT_SEED must be an unsigned integer")?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("mock_data")),
            files: DatasetFiles::default(),
            sizes: GeneratorSizes::default(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            insight_seed,
        })
    }

    /// Configuration rooted at `data_dir` with default file names and sizes.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Config {
            data_dir: data_dir.into(),
            files: DatasetFiles::default(),
            sizes: GeneratorSizes::default(),
            port: 8000,
            rust_log: "info".to_string(),
            insight_seed: None,
        }
    }
}
