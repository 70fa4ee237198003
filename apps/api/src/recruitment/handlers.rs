//! Axum route handlers for the Recruitment API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::recruitment::resume::{analyze_resume, ResumeAnalysis};
use crate::recruitment::summary::{summarize_recruitment, CandidateOutcome, RecruitmentSummary};
use crate::state::AppState;

/// GET /api/recruitment/summary
pub async fn handle_recruitment_summary(
    State(state): State<AppState>,
) -> Result<Json<RecruitmentSummary>, AppError> {
    let candidates: Vec<CandidateOutcome> = state
        .store
        .load_async(&state.config.files.recruitment)
        .await?;
    Ok(Json(summarize_recruitment(&candidates)))
}

/// GET /api/recruitment/candidates
///
/// The stored candidate list, verbatim. Empty list when nothing was generated.
pub async fn handle_candidates(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let candidates = state
        .store
        .load_value_async(&state.config.files.recruitment)
        .await?;
    Ok(Json(candidates.unwrap_or_else(|| Value::Array(vec![]))))
}

/// POST /api/recruitment/analyze_resume
///
/// Accepts a multipart upload with a `file` field. Only the file name is inspected.
pub async fn handle_analyze_resume(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let mut multipart =
        multipart.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let mut filename: Option<String> = None;
    let mut saw_file = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            saw_file = true;
            filename = field.file_name().map(str::to_string);
            break;
        }
    }

    if !saw_file {
        return Err(AppError::Validation(
            "multipart field 'file' is required".to_string(),
        ));
    }

    Ok(Json(analyze_resume(filename.as_deref())))
}
