use anyhow::{bail, Context, Result};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::config::Config;
use crate::mockdata::{vocab, DatasetGenerator, GenerationReport};
use crate::performance::models::{overall_score, PerformanceRecord, Recommendation};
use crate::store::DataStore;

const DEPARTMENTS: &[&str] = &[
    "IT", "HR", "Operations", "Finance", "Design", "Construction", "Procurement", "Marketing",
    "Customer Support", "Engineering", "Legal", "Quality Assurance", "R&D", "Administration",
];

const FEEDBACK_EN: &[&str] = &[
    "Consistent performer with strong attention to detail.",
    "Shows leadership potential; excellent team collaboration.",
    "Improvement needed in time management and goal focus.",
    "Highly adaptable, thrives in cross-functional projects.",
    "Strong technical foundation with innovative mindset.",
];

const FEEDBACK_AR: &[&str] = &[
    "موظف متميز يتمتع بدقة عالية في الأداء.",
    "يبدي قدرة قيادية ممتازة ويتعاون بشكل رائع مع الفريق.",
    "يحتاج إلى تحسين في إدارة الوقت والتركيز على الأهداف.",
    "مرن للغاية ويبدع في المشاريع المشتركة بين الأقسام.",
    "يمتلك أساسًا فنيًا قويًا وعقلية مبتكرة.",
];

const SALARY_INCREASES: &[u32] = &[0, 3, 5, 7, 10];
const YEARS: &[u16] = &[2023, 2024, 2025];

pub fn generate_employee<R: Rng + ?Sized>(rng: &mut R, companies: &[String]) -> PerformanceRecord {
    let company = companies.choose(rng).cloned().unwrap_or_default();
    let department = vocab::choose(rng, DEPARTMENTS).to_string();
    let attendance_score = rng.gen_range(60..=100);
    let productivity_score = rng.gen_range(50..=100);
    let teamwork_score = rng.gen_range(60..=100);
    let learning_score = rng.gen_range(50..=100);

    PerformanceRecord {
        employee_id: format!("E{}", rng.gen_range(10_000..=99_999)),
        name: vocab::english_name(rng),
        arabic_name: vocab::arabic_name(rng),
        company,
        department,
        attendance_score,
        productivity_score,
        teamwork_score,
        learning_score,
        overall_score: Some(overall_score(
            attendance_score,
            productivity_score,
            teamwork_score,
            learning_score,
        )),
        // English and Arabic feedback are drawn independently from parallel pools
        ai_feedback_en: vocab::choose(rng, FEEDBACK_EN).to_string(),
        ai_feedback_ar: vocab::choose(rng, FEEDBACK_AR).to_string(),
        promotion_recommendation: if rng.gen_bool(0.5) {
            Recommendation::Yes
        } else {
            Recommendation::No
        },
        salary_increase: SALARY_INCREASES.choose(rng).copied().unwrap_or(0),
        year: YEARS.choose(rng).copied().unwrap_or(2025),
    }
}

/// Employee KPI dataset. Each employee belongs to a company from the list
/// the workforce generator writes; without that list nothing is produced.
pub struct PerformanceGenerator {
    employees: usize,
    company_list: String,
    output: String,
}

impl PerformanceGenerator {
    pub fn from_config(config: &Config) -> Self {
        Self {
            employees: config.sizes.employees,
            company_list: config.files.company_list.clone(),
            output: config.files.performance.clone(),
        }
    }
}

impl DatasetGenerator for PerformanceGenerator {
    fn name(&self) -> &'static str {
        "performance"
    }

    fn generate(&self, store: &DataStore, rng: &mut dyn RngCore) -> Result<GenerationReport> {
        let companies: Option<Vec<String>> = store
            .load_optional(&self.company_list)
            .with_context(|| format!("reading {}", self.company_list))?;

        let companies = match companies {
            Some(list) if !list.is_empty() => list,
            Some(_) => bail!(
                "{} is empty; run the workforce generator first",
                store.path_of(&self.company_list).display()
            ),
            None => bail!(
                "{} not found; run the workforce generator first",
                store.path_of(&self.company_list).display()
            ),
        };

        let records: Vec<PerformanceRecord> = (0..self.employees)
            .map(|_| generate_employee(rng, &companies))
            .collect();

        let path = store
            .save(&self.output, &records)
            .context("writing performance dataset")?;

        Ok(GenerationReport {
            records: records.len(),
            outputs: vec![path],
        })
    }
}
