use axum::{extract::State, Json};

use crate::community::summary::RegionTag;
use crate::errors::AppError;
use crate::insights::models::InsightRecord;
use crate::insights::narrative::{
    compose_insight, compute_figures, motivational_message, GeneratedInsight, MotivationalMessage,
};
use crate::performance::summary::EmployeeScore;
use crate::recruitment::summary::CandidateOutcome;
use crate::state::AppState;
use crate::workforce::summary::CompanyHeadcount;

/// GET /api/insights/generate
///
/// Cross-domain figures plus one English and one Arabic insight line.
pub async fn handle_generate_insight(
    State(state): State<AppState>,
) -> Result<Json<GeneratedInsight>, AppError> {
    let files = &state.config.files;
    let store = &state.store;

    let (candidates, companies, employees, community, pool) = tokio::try_join!(
        store.load_async::<Vec<CandidateOutcome>>(&files.recruitment),
        store.load_async::<Vec<CompanyHeadcount>>(&files.workforce),
        store.load_async::<Vec<EmployeeScore>>(&files.performance),
        store.load_async::<Vec<RegionTag>>(&files.community),
        store.load_async::<Vec<InsightRecord>>(&files.insights),
    )?;

    let figures = compute_figures(&candidates, &companies, &employees, &community);
    let mut rng = state.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    Ok(Json(compose_insight(figures, &pool, &mut *rng)))
}

/// GET /api/insights/random
pub async fn handle_random_message(State(state): State<AppState>) -> Json<MotivationalMessage> {
    let mut rng = state.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    Json(motivational_message(&mut *rng))
}
