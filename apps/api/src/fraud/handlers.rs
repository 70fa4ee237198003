//! Axum route handlers for the Fraud & Integrity Monitor.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::errors::AppError;
use crate::fraud::alerts::{build_alerts, events_for_candidate, CandidateEvents};
use crate::fraud::generator::event_id;
use crate::fraud::log::{append_event, NewFraudEvent};
use crate::fraud::models::{FraudEvent, Severity};
use crate::state::AppState;
use crate::store::spawn_io;

#[derive(Debug, Deserialize)]
pub struct LogEventParams {
    pub candidate: String,
    pub event_type: String,
    pub severity: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LogEventResponse {
    pub message: String,
    pub event: FraudEvent,
}

async fn load_events(state: &AppState) -> Result<Vec<FraudEvent>, AppError> {
    Ok(state.store.load_async(&state.config.files.fraud).await?)
}

/// GET /api/fraud/alerts
pub async fn handle_fraud_alerts(State(state): State<AppState>) -> Result<Response, AppError> {
    let events = load_events(&state).await?;
    match build_alerts(&events) {
        Some(alerts) => Ok(Json(alerts).into_response()),
        None => Ok(Json(json!({ "error": "No fraud events found" })).into_response()),
    }
}

/// GET /api/fraud/candidate/:name
pub async fn handle_candidate_events(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CandidateEvents>, AppError> {
    let events = load_events(&state).await?;
    Ok(Json(events_for_candidate(&events, &name)))
}

/// POST /api/fraud/event?candidate=..&event_type=..&severity=..
///
/// Severity defaults to Low. The id and timestamp are assigned here.
pub async fn handle_log_event(
    State(state): State<AppState>,
    params: Result<Query<LogEventParams>, QueryRejection>,
) -> Result<Json<LogEventResponse>, AppError> {
    let Query(params) = params.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    if params.candidate.trim().is_empty() || params.event_type.trim().is_empty() {
        return Err(AppError::Validation(
            "candidate and event_type cannot be empty".to_string(),
        ));
    }

    let severity = match params.severity.as_deref() {
        None => Severity::Low,
        Some(raw) => raw.parse::<Severity>().map_err(AppError::Validation)?,
    };

    let new = NewFraudEvent {
        candidate: params.candidate,
        event_type: params.event_type,
        severity,
    };

    let id = {
        let mut rng = state.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        event_id(&mut *rng)
    };

    let store = state.store.clone();
    let file = state.config.files.fraud.clone();
    let event = spawn_io(move || append_event(&store, &file, new, id, Utc::now().naive_utc())).await?;

    info!(
        "Logged fraud event {} for {} ({})",
        event.event_id, event.candidate, event.severity
    );

    Ok(Json(LogEventResponse {
        message: "Event logged successfully".to_string(),
        event,
    }))
}
