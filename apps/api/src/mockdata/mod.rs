//! Batch generators for the mock datasets and the sequential "run all" driver.
//!
//! Every generator builds its whole dataset in memory and writes it through
//! `DataStore::save`, so an aborted run never leaves a half-written file.

pub mod vocab;

use std::path::PathBuf;

use anyhow::Result;
use clap::ValueEnum;
use rand::RngCore;
use tracing::{error, info};

use crate::community::generator::CommunityGenerator;
use crate::config::Config;
use crate::fraud::generator::FraudGenerator;
use crate::insights::generator::InsightsGenerator;
use crate::performance::generator::PerformanceGenerator;
use crate::recruitment::generator::RecruitmentGenerator;
use crate::store::DataStore;
use crate::workforce::generator::WorkforceGenerator;

/// What a generator wrote.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub records: usize,
    pub outputs: Vec<PathBuf>,
}

/// One dataset producer. Implementations read any upstream file they need
/// from the store and fail before writing when it is missing.
pub trait DatasetGenerator {
    fn name(&self) -> &'static str;

    fn generate(&self, store: &DataStore, rng: &mut dyn RngCore) -> Result<GenerationReport>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenerateTarget {
    All,
    Workforce,
    Performance,
    Fraud,
    Community,
    Insights,
    Recruitment,
}

/// Generators for `target`. `All` yields them in dependency order:
/// workforce writes the company list that performance reads.
pub fn generators_for(config: &Config, target: GenerateTarget) -> Vec<Box<dyn DatasetGenerator>> {
    let workforce = || Box::new(WorkforceGenerator::from_config(config)) as Box<dyn DatasetGenerator>;
    let performance = || Box::new(PerformanceGenerator::from_config(config)) as Box<dyn DatasetGenerator>;
    let fraud = || Box::new(FraudGenerator::from_config(config)) as Box<dyn DatasetGenerator>;
    let community = || Box::new(CommunityGenerator::from_config(config)) as Box<dyn DatasetGenerator>;
    let insights = || Box::new(InsightsGenerator::from_config(config)) as Box<dyn DatasetGenerator>;
    let recruitment = || Box::new(RecruitmentGenerator::from_config(config)) as Box<dyn DatasetGenerator>;

    match target {
        GenerateTarget::All => vec![
            workforce(),
            performance(),
            fraud(),
            community(),
            insights(),
            recruitment(),
        ],
        GenerateTarget::Workforce => vec![workforce()],
        GenerateTarget::Performance => vec![performance()],
        GenerateTarget::Fraud => vec![fraud()],
        GenerateTarget::Community => vec![community()],
        GenerateTarget::Insights => vec![insights()],
        GenerateTarget::Recruitment => vec![recruitment()],
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub succeeded: Vec<&'static str>,
    pub failed: Vec<&'static str>,
}

/// Runs generators one after another. A failing generator is logged and
/// skipped; the remaining ones still run.
pub fn run_generators(
    store: &DataStore,
    generators: &[Box<dyn DatasetGenerator>],
    rng: &mut dyn RngCore,
) -> RunSummary {
    let mut summary = RunSummary::default();
    let total = generators.len();

    for (i, generator) in generators.iter().enumerate() {
        info!("[{}/{}] generating {} dataset", i + 1, total, generator.name());
        match generator.generate(store, rng) {
            Ok(report) => {
                for path in &report.outputs {
                    info!("  wrote {} ({} records)", path.display(), report.records);
                }
                summary.succeeded.push(generator.name());
            }
            Err(e) => {
                error!("{} generator failed: {e:#}", generator.name());
                summary.failed.push(generator.name());
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_config(dir: &std::path::Path) -> Config {
        let mut config = Config::with_data_dir(dir);
        config.sizes.candidates = 40;
        config.sizes.roles = 120;
        config.sizes.companies = 12;
        config.sizes.employees = 50;
        config.sizes.community_records = 60;
        config.sizes.fraud_events = 30;
        config.sizes.insights = 25;
        config
    }

    #[test]
    fn test_run_all_writes_every_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        let store = DataStore::new(&config.data_dir);
        let mut rng = StdRng::seed_from_u64(2025);

        let generators = generators_for(&config, GenerateTarget::All);
        let summary = run_generators(&store, &generators, &mut rng);

        assert!(summary.failed.is_empty(), "failed: {:?}", summary.failed);
        assert_eq!(summary.succeeded.len(), 6);
        for file in [
            &config.files.workforce,
            &config.files.company_list,
            &config.files.performance,
            &config.files.fraud,
            &config.files.community,
            &config.files.community_regions,
            &config.files.insights,
            &config.files.recruitment,
        ] {
            assert!(store.exists(file), "{file} missing");
        }
    }

    #[test]
    fn test_failed_generator_does_not_stop_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        let store = DataStore::new(&config.data_dir);
        let mut rng = StdRng::seed_from_u64(3);

        // performance without a company list fails, fraud still runs
        let generators = vec![
            Box::new(PerformanceGenerator::from_config(&config)) as Box<dyn DatasetGenerator>,
            Box::new(FraudGenerator::from_config(&config)) as Box<dyn DatasetGenerator>,
        ];
        let summary = run_generators(&store, &generators, &mut rng);

        assert_eq!(summary.failed, vec!["performance"]);
        assert_eq!(summary.succeeded, vec!["fraud"]);
        assert!(!store.exists(&config.files.performance));
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        for dir in [&a, &b] {
            let config = small_config(dir.path());
            let store = DataStore::new(&config.data_dir);
            let mut rng = StdRng::seed_from_u64(99);
            let generators = generators_for(&config, GenerateTarget::Community);
            run_generators(&store, &generators, &mut rng);
        }
        let left = std::fs::read(a.path().join("community_data.json")).unwrap();
        let right = std::fs::read(b.path().join("community_data.json")).unwrap();
        assert_eq!(left, right);
    }
}
