//! Health check endpoint

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    profile_store: &'static str,
    completion: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// GET /health - Check profile store reachability and report AI availability
pub async fn check(State(state): State<AppState>) -> impl IntoResponse {
    let completion = if state.completion_configured {
        "configured"
    } else {
        "disabled"
    };
    let profile_store = state.profiles.backend();

    match state.profiles.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                profile_store,
                completion,
                reason: None,
            }),
        ),
        Err(e) => {
            tracing::error!(error = ?e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    profile_store,
                    completion,
                    reason: Some(format!("Profile store unavailable: {:?}", e)),
                }),
            )
        }
    }
}
