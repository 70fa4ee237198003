use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;
use crate::workforce::summary::{summarize_workforce, CompanyHeadcount};

/// GET /api/workforce/overview
pub async fn handle_workforce_overview(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let records = state
        .store
        .load_value_async(&state.config.files.workforce)
        .await?;
    Ok(Json(records.unwrap_or_else(|| Value::Array(vec![]))))
}

/// GET /api/workforce/summary
pub async fn handle_workforce_summary(State(state): State<AppState>) -> Result<Response, AppError> {
    let records: Vec<CompanyHeadcount> = state
        .store
        .load_async(&state.config.files.workforce)
        .await?;

    if records.is_empty() {
        return Ok(Json(json!({ "message": "No workforce data available" })).into_response());
    }

    Ok(Json(summarize_workforce(&records)).into_response())
}
