//! Dashboard sessions keyed by the `X-Session-ID` header

use axum::{
    body::Body,
    extract::{FromRequestParts, Request},
    http::{HeaderValue, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::AppError;

pub const SESSION_ID_HEADER: &str = "X-Session-ID";

/// Longest accepted client-supplied session ID
const MAX_SESSION_ID_LEN: usize = 128;

/// Session the request belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId {
    pub id: String,
    /// Minted by the server for this request; the client has never seen it
    pub issued: bool,
}

fn usable(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_SESSION_ID_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Attach a session to every request, minting one when the client sent none
pub async fn session_middleware(mut request: Request<Body>, next: Next) -> Response {
    let session = match request
        .headers()
        .get(SESSION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| usable(v))
    {
        Some(id) => SessionId {
            id: id.to_string(),
            issued: false,
        },
        None => SessionId {
            id: Uuid::new_v4().to_string(),
            issued: true,
        },
    };

    let header = HeaderValue::from_str(&session.id);
    request.extensions_mut().insert(session);

    let mut response = next.run(request).await;
    if let Ok(value) = header {
        response.headers_mut().insert(SESSION_ID_HEADER, value);
    }
    response
}

impl<S: Send + Sync> FromRequestParts<S> for SessionId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionId>()
            .cloned()
            .ok_or_else(|| AppError::Internal("Session middleware not installed".to_string()))
    }
}
