use anyhow::{Context, Result};
use rand::{Rng, RngCore};

use crate::config::Config;
use crate::insights::models::{InsightRecord, ARABIC, ENGLISH};
use crate::mockdata::{vocab, DatasetGenerator, GenerationReport};
use crate::stats::round2;
use crate::store::DataStore;
use crate::workforce::generator::CITIES;

const TEMPLATES_EN: &[&str] = &[
    "AI analysis shows {percent}% improvement in Saudization this quarter.",
    "Employee satisfaction increased by {percent}%.",
    "Performance KPIs improved by {percent}% across all departments.",
    "Fraud alerts reduced by {percent}% since last audit.",
    "Recruitment efficiency improved by {percent}% in {region}.",
    "Regional growth in community workforce reached {percent}% this quarter.",
];

const TEMPLATES_AR: &[&str] = &[
    "تحليل الذكاء الاصطناعي يُظهر تحسنًا بنسبة {percent}٪ في السعودة هذا الربع.",
    "زاد رضا الموظفين بنسبة {percent}٪.",
    "تحسنت مؤشرات الأداء بنسبة {percent}٪ في جميع الأقسام.",
    "انخفضت التنبيهات الاحتيالية بنسبة {percent}٪ منذ المراجعة الأخيرة.",
    "تحسنت كفاءة التوظيف بنسبة {percent}٪ في {region}.",
    "وصل نمو القوى العاملة المجتمعية إلى {percent}٪ هذا الربع.",
];

const CATEGORIES: &[&str] = &[
    "Recruitment", "Performance", "Community", "Workforce", "Fraud", "General",
];

fn fill(template: &str, percent: u32, region: &str) -> String {
    template
        .replace("{percent}", &percent.to_string())
        .replace("{region}", region)
}

/// One template instantiation. The template is drawn uniformly from the
/// union of both language pools, so the language follows the template.
pub fn generate_insight<R: Rng + ?Sized>(rng: &mut R) -> InsightRecord {
    let percent = rng.gen_range(3..=25);
    let region = vocab::choose(rng, CITIES);

    let pick = rng.gen_range(0..TEMPLATES_EN.len() + TEMPLATES_AR.len());
    let (template, language) = match TEMPLATES_EN.get(pick) {
        Some(t) => (*t, ENGLISH),
        None => (TEMPLATES_AR[pick - TEMPLATES_EN.len()], ARABIC),
    };

    InsightRecord {
        language: language.to_string(),
        category: vocab::choose(rng, CATEGORIES).to_string(),
        text: fill(template, percent, region),
        impact_score: round2(rng.gen_range(0.5..=1.0)),
    }
}

pub struct InsightsGenerator {
    insights: usize,
    output: String,
}

impl InsightsGenerator {
    pub fn from_config(config: &Config) -> Self {
        Self {
            insights: config.sizes.insights,
            output: config.files.insights.clone(),
        }
    }
}

impl DatasetGenerator for InsightsGenerator {
    fn name(&self) -> &'static str {
        "insights"
    }

    fn generate(&self, store: &DataStore, rng: &mut dyn RngCore) -> Result<GenerationReport> {
        let insights: Vec<InsightRecord> = (0..self.insights).map(|_| generate_insight(rng)).collect();

        let path = store
            .save(&self.output, &insights)
            .context("writing insights pool")?;

        Ok(GenerationReport {
            records: insights.len(),
            outputs: vec![path],
        })
    }
}
