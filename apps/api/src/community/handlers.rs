use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

async fn load_community(state: &AppState) -> Result<Json<Value>, AppError> {
    let data = state
        .store
        .load_value_async(&state.config.files.community)
        .await?;
    Ok(Json(
        data.unwrap_or_else(|| json!({ "error": "Community data not found" })),
    ))
}

/// GET /api/community/summary
pub async fn handle_community_summary(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    load_community(&state).await
}

/// GET /api/community/overview
///
/// Same payload as `/summary`; both routes are consumed by the dashboard.
pub async fn handle_community_overview(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    load_community(&state).await
}

/// GET /api/community/regions
pub async fn handle_community_regions(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let regions = state
        .store
        .load_value_async(&state.config.files.community_regions)
        .await?;
    Ok(Json(regions.unwrap_or_else(|| Value::Array(vec![]))))
}
