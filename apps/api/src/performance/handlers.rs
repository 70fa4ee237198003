use axum::{extract::State, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::performance::summary::{summarize_performance, EmployeeScore, PerformanceSummary};
use crate::state::AppState;

/// GET /api/performance/summary
///
/// Returns the raw employee records; the dashboard aggregates client-side.
pub async fn handle_performance_summary(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let records = state
        .store
        .load_value_async(&state.config.files.performance)
        .await?;
    Ok(Json(records.unwrap_or_else(|| Value::Array(vec![]))))
}

/// GET /api/performance/stats
pub async fn handle_performance_stats(
    State(state): State<AppState>,
) -> Result<Json<PerformanceSummary>, AppError> {
    let records: Vec<EmployeeScore> = state
        .store
        .load_async(&state.config.files.performance)
        .await?;
    Ok(Json(summarize_performance(&records)))
}
