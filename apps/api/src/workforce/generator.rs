use anyhow::{Context, Result};
use rand::{Rng, RngCore};

use crate::config::Config;
use crate::mockdata::{vocab, DatasetGenerator, GenerationReport};
use crate::stats::round2;
use crate::store::DataStore;
use crate::workforce::models::CompanyWorkforceRecord;

pub const CITIES: &[&str] = &[
    "Riyadh", "Jeddah", "Dammam", "Mecca", "Medina", "Tabuk", "Abha", "Yanbu", "Al Khobar",
    "Taif",
];

pub fn generate_company<R: Rng + ?Sized>(rng: &mut R, company: String) -> CompanyWorkforceRecord {
    let total_workers = rng.gen_range(50..=2000);
    let saudization: u32 = rng.gen_range(15..=95);
    let growth = round2(rng.gen_range(0.5..=6.0));
    let region = vocab::choose(rng, CITIES).to_string();
    CompanyWorkforceRecord::new(company, region, total_workers, saudization, growth)
}

/// Writes the shared company list and one workforce record per company.
pub struct WorkforceGenerator {
    companies: usize,
    company_list: String,
    output: String,
}

impl WorkforceGenerator {
    pub fn from_config(config: &Config) -> Self {
        Self {
            companies: config.sizes.companies,
            company_list: config.files.company_list.clone(),
            output: config.files.workforce.clone(),
        }
    }
}

impl DatasetGenerator for WorkforceGenerator {
    fn name(&self) -> &'static str {
        "workforce"
    }

    fn generate(&self, store: &DataStore, rng: &mut dyn RngCore) -> Result<GenerationReport> {
        let companies = vocab::unique_company_names(rng, self.companies);
        let records: Vec<CompanyWorkforceRecord> = companies
            .iter()
            .map(|name| generate_company(rng, name.clone()))
            .collect();

        let list_path = store
            .save(&self.company_list, &companies)
            .context("writing company list")?;
        let data_path = store
            .save(&self.output, &records)
            .context("writing workforce dataset")?;

        Ok(GenerationReport {
            records: records.len(),
            outputs: vec![data_path, list_path],
        })
    }
}
