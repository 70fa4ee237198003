use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::config::Config;
use crate::mockdata::{vocab, DatasetGenerator, GenerationReport};
use crate::recruitment::models::{CandidateRecord, Decision, ScoreWeights};
use crate::store::DataStore;

const BASE_ROLES: &[&str] = &[
    // IT & digital
    "Software Engineer", "AI Specialist", "Data Scientist", "Cybersecurity Analyst",
    "DevOps Engineer", "Cloud Architect", "Full-Stack Developer", "Mobile App Developer",
    "UI/UX Designer", "Game Developer",
    // engineering & manufacturing
    "Civil Engineer", "Mechanical Engineer", "Electrical Engineer", "HVAC Technician",
    "Auto Mechanic", "Industrial Engineer", "Project Manager", "Safety Officer",
    "Quality Inspector", "Fabrication Technician",
    // healthcare & science
    "Doctor", "Nurse", "Pharmacist", "Surgeon", "Biomedical Scientist", "Lab Technician",
    "Research Scientist", "Environmental Scientist", "Chemist", "Biochemist", "Radiologist",
    "Dentist", "Veterinarian",
    // education
    "Teacher", "Professor", "Curriculum Designer", "Education Technologist",
    "Training Coordinator",
    // business & finance
    "Accountant", "Auditor", "Financial Analyst", "Procurement Officer", "HR Specialist",
    "Operations Manager", "Business Consultant", "Bank Officer", "Economist",
    "Compliance Officer",
    // agriculture & environment
    "Agronomist", "Farm Technician", "Hydroponic Operator", "Food Scientist",
    "Sustainability Consultant",
    // creative & design
    "Architect", "Interior Designer", "Graphic Designer", "Fashion Technologist", "Animator",
    "Photographer", "Video Editor", "Product Designer", "Industrial Designer",
    // construction & logistics
    "Site Supervisor", "Quantity Surveyor", "Construction Foreman", "Truck Driver",
    "Logistics Coordinator",
    // energy
    "Petroleum Engineer", "Renewable Energy Specialist", "Solar Technician", "Geologist",
    "Energy Analyst",
    // tourism & hospitality
    "Hotel Manager", "Chef", "Tour Guide", "Travel Consultant", "Front Desk Officer",
    // admin & services
    "Office Administrator", "Receptionist", "Customer Service Rep", "Secretary",
    "Payroll Officer",
    // public services
    "Legal Advisor", "Security Analyst", "Public Relations Officer",
    "Government Relations Specialist",
];

const SKILLS: &[&str] = &[
    "Python", "Java", "React", "Machine Learning", "AutoCAD", "Finance", "Leadership",
    "Communication", "Negotiation", "Electrical Systems", "Data Analysis", "Teamwork",
    "Project Planning", "Customer Service", "Creativity", "Problem Solving", "Research",
    "Sustainability", "Teaching", "Healthcare",
];

const SKILLS_PER_CANDIDATE: usize = 3;

/// Feedback pairs: index i of one pool carries the same meaning as index i of the other.
const FEEDBACK_EN: &[&str] = &[
    "Strong technical foundation with good collaboration.",
    "Excellent communicator and fast learner.",
    "Reliable professional with adaptive mindset.",
    "Shows leadership and teamwork in complex environments.",
    "Analytical thinker with growth potential.",
];

const FEEDBACK_AR: &[&str] = &[
    "أساس تقني قوي وقدرة جيدة على التعاون.",
    "متواصل ممتاز وسريع التعلم.",
    "محترف موثوق يتمتع بعقلية مرنة.",
    "يُظهر قيادة وروح عمل جماعي في بيئات معقدة.",
    "مفكر تحليلي يتمتع بإمكانيات عالية للنمو.",
];

const FRAUD_FLAG_PROBABILITY: f64 = 0.02;

/// Expands the base role list to `target` titles by appending a numbered
/// variant of a random existing title.
pub fn expand_roles<R: Rng + ?Sized>(rng: &mut R, target: usize) -> Vec<String> {
    let mut roles: Vec<String> = BASE_ROLES.iter().map(|r| r.to_string()).collect();
    while roles.len() < target {
        let idx = rng.gen_range(0..roles.len());
        let variant = format!("{} {}", roles[idx], rng.gen_range(1..=9));
        roles.push(variant);
    }
    roles
}

pub fn generate_candidate<R: Rng + ?Sized>(
    rng: &mut R,
    id: u32,
    roles: &[String],
    weights: &ScoreWeights,
) -> CandidateRecord {
    let name = vocab::english_name(rng);
    let arabic_name = vocab::arabic_name(rng);
    let position = roles.choose(rng).cloned().unwrap_or_default();
    let experience_years = rng.gen_range(0..=25);
    let skills = SKILLS
        .choose_multiple(rng, SKILLS_PER_CANDIDATE)
        .map(|s| s.to_string())
        .collect();

    let technical_score = rng.gen_range(55..=100);
    let communication_score = rng.gen_range(55..=100);
    let attitude_score = rng.gen_range(55..=100);
    let teamwork_score = rng.gen_range(55..=100);
    let ai_overall_score = weights.overall(
        technical_score,
        communication_score,
        attitude_score,
        teamwork_score,
    );

    let feedback = rng.gen_range(0..FEEDBACK_EN.len());

    CandidateRecord {
        id,
        name,
        arabic_name,
        position,
        experience_years,
        skills,
        technical_score,
        communication_score,
        attitude_score,
        teamwork_score,
        ai_overall_score,
        ai_feedback_en: FEEDBACK_EN[feedback].to_string(),
        ai_feedback_ar: FEEDBACK_AR[feedback].to_string(),
        decision: Decision::from_overall(ai_overall_score),
        fraud_flag: rng.gen_bool(FRAUD_FLAG_PROBABILITY),
    }
}

pub struct RecruitmentGenerator {
    candidates: usize,
    roles: usize,
    output: String,
}

impl RecruitmentGenerator {
    pub fn from_config(config: &Config) -> Self {
        Self {
            candidates: config.sizes.candidates,
            roles: config.sizes.roles,
            output: config.files.recruitment.clone(),
        }
    }
}

impl DatasetGenerator for RecruitmentGenerator {
    fn name(&self) -> &'static str {
        "recruitment"
    }

    fn generate(&self, store: &DataStore, rng: &mut dyn RngCore) -> Result<GenerationReport> {
        let roles = expand_roles(rng, self.roles);
        let weights = ScoreWeights::default();
        let candidates: Vec<CandidateRecord> = (1..=self.candidates as u32)
            .map(|id| generate_candidate(rng, id, &roles, &weights))
            .collect();

        let path = store
            .save(&self.output, &candidates)
            .context("writing recruitment dataset")?;

        Ok(GenerationReport {
            records: candidates.len(),
            outputs: vec![path],
        })
    }
}
