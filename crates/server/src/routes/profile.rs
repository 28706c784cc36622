//! Patient profile endpoints

use axum::{Json, extract::State};
use healthai_core::{Notice, Profile};
use serde::Serialize;

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::middleware::SessionId;
use crate::state::AppState;

/// Response body for profile reads and updates
#[derive(Serialize)]
pub struct ProfileResponse {
    session: String,
    profile: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<Notice>,
}

/// GET /api/profile - Current profile, created with defaults on first access.
///
/// A session minted for this very request reads the default profile without
/// storing it; the row is created once the client comes back with the ID.
pub async fn read(
    State(state): State<AppState>,
    session: SessionId,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = if session.issued {
        state.profiles.get(&session.id).await?
    } else {
        state.profiles.initialize(&session.id).await?
    };

    Ok(Json(ProfileResponse {
        session: session.id,
        profile,
        notice: None,
    }))
}

/// PUT /api/profile - Replace the profile; missing fields take their defaults
pub async fn update(
    State(state): State<AppState>,
    session: SessionId,
    ApiJson(body): ApiJson<Profile>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = state.profiles.update(&session.id, body).await?;
    tracing::info!(session = %session.id, backend = state.profiles.backend(), "Profile updated");

    Ok(Json(ProfileResponse {
        session: session.id,
        profile,
        notice: Some(Notice::success("Profile updated successfully!")),
    }))
}
