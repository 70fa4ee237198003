//! Cross-domain figures and the bilingual flavor text built from them.
//!
//! Text selection is random by nature; every function takes the random
//! source explicitly so a seeded generator reproduces the same lines.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::community::summary::{distinct_region_count, top_region, RegionTag};
use crate::insights::models::InsightRecord;
use crate::performance::summary::{summarize_performance, EmployeeScore};
use crate::recruitment::summary::{summarize_recruitment, CandidateOutcome};
use crate::workforce::summary::{average_saudization, CompanyHeadcount};

/// Probability that a line from the insight pool replaces the computed one.
pub const POOL_OVERRIDE_PROBABILITY: f64 = 0.5;

const MOTIVATION_EN: &[&str] = &[
    "Great progress! Keep building a smarter, more inclusive workforce.",
    "AI metrics show upward growth — consistency is the new excellence.",
    "Localization and innovation go hand-in-hand toward Vision 2030.",
];

const MOTIVATION_AR: &[&str] = &[
    "تقدّم رائع! استمر في بناء قوة عاملة أذكى وأكثر شمولًا.",
    "تُظهر مؤشرات الذكاء الاصطناعي نموًا إيجابيًا — الاستمرارية هي التميز الجديد.",
    "التوطين والابتكار يسيران جنبًا إلى جنب نحو رؤية 2030.",
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InsightFigures {
    pub total_candidates: usize,
    pub shortlisted: usize,
    #[serde(rename = "rejection_rate_%")]
    pub rejection_rate: f64,
    #[serde(rename = "average_saudization_%")]
    pub average_saudization: f64,
    #[serde(rename = "average_performance_%")]
    pub average_performance: f64,
    pub top_region: String,
    #[serde(skip)]
    pub common_role: String,
    #[serde(skip)]
    pub high_performers: usize,
    #[serde(skip)]
    pub region_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeneratedInsight {
    pub summary: InsightFigures,
    pub insight_en: String,
    pub insight_ar: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MotivationalMessage {
    pub message_en: String,
    pub message_ar: String,
}

pub fn compute_figures(
    candidates: &[CandidateOutcome],
    companies: &[CompanyHeadcount],
    employees: &[EmployeeScore],
    community: &[RegionTag],
) -> InsightFigures {
    let recruitment = summarize_recruitment(candidates);
    let performance = summarize_performance(employees);

    InsightFigures {
        total_candidates: recruitment.total_candidates,
        shortlisted: recruitment.shortlisted,
        rejection_rate: recruitment.rejection_rate,
        average_saudization: average_saudization(companies),
        average_performance: performance.average_performance,
        top_region: top_region(community),
        common_role: recruitment.most_common_role,
        high_performers: performance.high_performers,
        region_count: distinct_region_count(community),
    }
}

fn english_candidates<R: Rng + ?Sized>(f: &InsightFigures, rng: &mut R) -> Vec<String> {
    vec![
        format!(
            "Across {} regions, average Saudization stands at {}%. {} leads in localization efforts.",
            f.region_count, f.average_saudization, f.top_region
        ),
        format!(
            "Average employee performance is {}%, with {} high-performing employees identified this quarter.",
            f.average_performance, f.high_performers
        ),
        format!(
            "Hiring focus shifted toward {}, while overall rejection rate remains {}%.",
            f.common_role, f.rejection_rate
        ),
        format!(
            "Saudization and performance metrics indicate steady workforce growth of {}% quarter-over-quarter.",
            rng.gen_range(3..=7)
        ),
    ]
}

fn arabic_candidates<R: Rng + ?Sized>(f: &InsightFigures, rng: &mut R) -> Vec<String> {
    vec![
        format!(
            "في {} منطقة، يبلغ متوسط التوطين {}٪، وتتصدّر منطقة {} جهود التوطين.",
            f.region_count, f.average_saudization, f.top_region
        ),
        format!(
            "متوسط أداء الموظفين هو {}٪، مع {} موظفًا عالي الأداء تم تحديدهم هذا الربع.",
            f.average_performance, f.high_performers
        ),
        format!(
            "تركز التوظيف مؤخرًا على وظيفة {}، بينما تبلغ نسبة الرفض الإجمالية {}٪.",
            f.common_role, f.rejection_rate
        ),
        format!(
            "تشير مؤشرات التوطين والأداء إلى نمو مستقر في القوى العاملة بنسبة {}٪ مقارنة بالربع السابق.",
            rng.gen_range(3..=7)
        ),
    ]
}

/// Picks one computed line per language, then, independently per language,
/// swaps it for a random pool line of that language with probability
/// `POOL_OVERRIDE_PROBABILITY` when the pool has any.
pub fn compose_insight<R: Rng + ?Sized>(
    figures: InsightFigures,
    pool: &[InsightRecord],
    rng: &mut R,
) -> GeneratedInsight {
    let mut insight_en = english_candidates(&figures, rng)
        .choose(rng)
        .cloned()
        .unwrap_or_default();
    let mut insight_ar = arabic_candidates(&figures, rng)
        .choose(rng)
        .cloned()
        .unwrap_or_default();

    let pool_en: Vec<&InsightRecord> = pool.iter().filter(|i| i.is_english()).collect();
    let pool_ar: Vec<&InsightRecord> = pool.iter().filter(|i| i.is_arabic()).collect();

    if !pool_en.is_empty() && rng.gen_bool(POOL_OVERRIDE_PROBABILITY) {
        if let Some(line) = pool_en.choose(rng) {
            insight_en = line.text.clone();
        }
    }
    if !pool_ar.is_empty() && rng.gen_bool(POOL_OVERRIDE_PROBABILITY) {
        if let Some(line) = pool_ar.choose(rng) {
            insight_ar = line.text.clone();
        }
    }

    GeneratedInsight {
        summary: figures,
        insight_en,
        insight_ar,
    }
}

pub fn motivational_message<R: Rng + ?Sized>(rng: &mut R) -> MotivationalMessage {
    MotivationalMessage {
        message_en: crate::mockdata::vocab::choose(rng, MOTIVATION_EN).to_string(),
        message_ar: crate::mockdata::vocab::choose(rng, MOTIVATION_AR).to_string(),
    }
}
