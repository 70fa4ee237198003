pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::community::handlers as community;
use crate::fraud::handlers as fraud;
use crate::insights::handlers as insights;
use crate::performance::handlers as performance;
use crate::recruitment::handlers as recruitment;
use crate::state::AppState;
use crate::workforce::handlers as workforce;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/api/health", get(health::health_handler))
        // Recruitment copilot
        .route(
            "/api/recruitment/summary",
            get(recruitment::handle_recruitment_summary),
        )
        .route(
            "/api/recruitment/candidates",
            get(recruitment::handle_candidates),
        )
        .route(
            "/api/recruitment/analyze_resume",
            post(recruitment::handle_analyze_resume),
        )
        // Workforce optimizer
        .route(
            "/api/workforce/overview",
            get(workforce::handle_workforce_overview),
        )
        .route(
            "/api/workforce/summary",
            get(workforce::handle_workforce_summary),
        )
        // Performance evaluation
        .route(
            "/api/performance/summary",
            get(performance::handle_performance_summary),
        )
        .route(
            "/api/performance/stats",
            get(performance::handle_performance_stats),
        )
        // Community planner
        .route(
            "/api/community/summary",
            get(community::handle_community_summary),
        )
        .route(
            "/api/community/overview",
            get(community::handle_community_overview),
        )
        .route(
            "/api/community/regions",
            get(community::handle_community_regions),
        )
        // Fraud & integrity monitor
        .route("/api/fraud/alerts", get(fraud::handle_fraud_alerts))
        .route(
            "/api/fraud/candidate/:name",
            get(fraud::handle_candidate_events),
        )
        .route("/api/fraud/event", post(fraud::handle_log_event))
        // AI insights
        .route(
            "/api/insights/generate",
            get(insights::handle_generate_insight),
        )
        .route("/api/insights/random", get(insights::handle_random_message))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::store::DataStore;

    fn make_state(dir: &std::path::Path) -> AppState {
        let mut config = Config::with_data_dir(dir);
        config.insight_seed = Some(7);
        AppState::new(config)
    }

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(state: &AppState, uri: &str) -> (StatusCode, Value) {
        send(state, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    #[tokio::test]
    async fn test_health_and_root() {
        let dir = tempfile::tempdir().unwrap();
        let state = make_state(dir.path());

        let (status, body) = get_json(&state, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (_, body) = get_json(&state, "/").await;
        assert!(body["message"].as_str().unwrap().contains("StaffTract"));
    }

    #[tokio::test]
    async fn test_missing_datasets_are_not_failures() {
        let dir = tempfile::tempdir().unwrap();
        let state = make_state(dir.path());

        let (status, body) = get_json(&state, "/api/recruitment/candidates").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, body) = get_json(&state, "/api/workforce/summary").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "No workforce data available");

        let (_, body) = get_json(&state, "/api/community/overview").await;
        assert_eq!(body["error"], "Community data not found");

        let (_, body) = get_json(&state, "/api/fraud/alerts").await;
        assert_eq!(body["error"], "No fraud events found");

        let (status, body) = get_json(&state, "/api/insights/generate").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["total_candidates"], 0);
        assert_eq!(body["summary"]["top_region"], "Riyadh");
        assert!(body["insight_ar"].is_string());
    }

    #[tokio::test]
    async fn test_workforce_summary_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let state = make_state(dir.path());
        DataStore::new(dir.path())
            .save(
                &state.config.files.workforce,
                &json!([
                    {"company": "A", "region": "Taif", "total_workers": 100, "saudi_workers": 50,
                     "expat_workers": 50, "saudization_%": 50, "category": "Yellow", "growth": 1.2},
                    {"company": "B", "region": "Abha", "total_workers": 200, "saudi_workers": 100,
                     "expat_workers": 100, "saudization_%": 50, "category": "Yellow", "growth": 3.4}
                ]),
            )
            .unwrap();

        let (_, body) = get_json(&state, "/api/workforce/summary").await;
        assert_eq!(body["total_employees"], 300);
        assert_eq!(body["saudization_rate"], 50.0);
    }

    #[tokio::test]
    async fn test_community_routes_return_identical_content() {
        let dir = tempfile::tempdir().unwrap();
        let state = make_state(dir.path());
        let data = json!([{"region": "Hail", "total_workers": 10, "saudi_workers": 4}]);
        DataStore::new(dir.path())
            .save(&state.config.files.community, &data)
            .unwrap();

        let (_, summary) = get_json(&state, "/api/community/summary").await;
        let (_, overview) = get_json(&state, "/api/community/overview").await;
        assert_eq!(summary, data);
        assert_eq!(overview, data);
    }

    #[tokio::test]
    async fn test_log_event_then_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let state = make_state(dir.path());

        let request = Request::post(
            "/api/fraud/event?candidate=Ahmed%20Al-Farsi&event_type=Camera%20Blocked&severity=High",
        )
        .body(Body::empty())
        .unwrap();
        let (status, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Event logged successfully");
        assert_eq!(body["event"]["severity"], "High");

        let request = Request::post("/api/fraud/event?candidate=Sara&event_type=Inactivity%20Timeout")
            .body(Body::empty())
            .unwrap();
        let (_, body) = send(&state, request).await;
        assert_eq!(body["event"]["severity"], "Low");

        let (_, body) = get_json(&state, "/api/fraud/candidate/ahmed").await;
        assert_eq!(body["total_events"], 1);
        assert_eq!(body["events"][0]["candidate"], "Ahmed Al-Farsi");

        let (_, alerts) = get_json(&state, "/api/fraud/alerts").await;
        assert_eq!(alerts["total_events"], 2);
        assert_eq!(alerts["high_risk"], 1);
        assert_eq!(alerts["low_risk"], 1);
    }

    #[tokio::test]
    async fn test_log_event_rejects_unknown_severity() {
        let dir = tempfile::tempdir().unwrap();
        let state = make_state(dir.path());
        let request = Request::post("/api/fraud/event?candidate=X&event_type=Y&severity=Extreme")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(!DataStore::new(dir.path()).exists(&state.config.files.fraud));
    }

    #[tokio::test]
    async fn test_analyze_resume_multipart() {
        let dir = tempfile::tempdir().unwrap();
        let state = make_state(dir.path());
        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"Data Scientist CV.pdf\"\r\n\
             Content-Type: application/pdf\r\n\r\n\
             %PDF-1.4 mock\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::post("/api/recruitment/analyze_resume")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let (status, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filename"], "Data Scientist CV.pdf");
        assert_eq!(body["match_score"], 92);
    }

    #[tokio::test]
    async fn test_summaries_read_minimal_records() {
        let dir = tempfile::tempdir().unwrap();
        let state = make_state(dir.path());
        let store = DataStore::new(dir.path());
        let files = &state.config.files;

        store
            .save(
                &files.workforce,
                &json!([
                    {"total_workers": 100, "saudi_workers": 50},
                    {"total_workers": 200, "saudi_workers": 100}
                ]),
            )
            .unwrap();
        let candidates: Vec<Value> = (0..10)
            .map(|i| {
                let result = if i < 6 { "Shortlisted" } else { "Rejected" };
                json!({"result": result, "role_applied": "Nurse"})
            })
            .collect();
        store.save(&files.recruitment, &candidates).unwrap();
        store
            .save(
                &files.performance,
                &json!([{"overall_score": 80}, {"overall_score": 90}, {"overall_score": 100}]),
            )
            .unwrap();
        store
            .save(&files.insights, &json!([{"language": "English", "text": "pool en"}]))
            .unwrap();
        store
            .save(
                &files.fraud,
                &json!([{"candidate": "Omar", "event_type": "Camera Blocked", "severity": "Critical"}]),
            )
            .unwrap();

        let (status, body) = get_json(&state, "/api/workforce/summary").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["saudization_rate"], 50.0);

        let (status, body) = get_json(&state, "/api/recruitment/summary").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rejection_rate_%"], 40.0);
        assert_eq!(body["most_common_role"], "Nurse");

        let (status, body) = get_json(&state, "/api/performance/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["average_performance_%"], 90.0);

        let (status, body) = get_json(&state, "/api/insights/generate").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["average_saudization_%"], 50.0);
        assert_eq!(body["summary"]["shortlisted"], 6);

        let (status, body) = get_json(&state, "/api/fraud/alerts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_events"], 1);
        assert_eq!(body["high_risk"], 0);
        assert_eq!(body["recent_alerts"][0]["severity"], "Critical");
    }

    #[tokio::test]
    async fn test_missing_query_parameter_is_json_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = make_state(dir.path());
        let request = Request::post("/api/fraud/event?event_type=Camera%20Blocked")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("candidate"));
    }

    #[tokio::test]
    async fn test_non_multipart_resume_is_json_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = make_state(dir.path());
        let request = Request::post("/api/recruitment/analyze_resume")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"file": "cv.pdf"}"#))
            .unwrap();
        let (status, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_random_message_is_bilingual() {
        let dir = tempfile::tempdir().unwrap();
        let state = make_state(dir.path());
        let (_, body) = get_json(&state, "/api/insights/random").await;
        assert!(body["message_en"].is_string());
        assert!(body["message_ar"].is_string());
    }
}
