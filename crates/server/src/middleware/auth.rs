//! Optional API key authentication for `/api`

use axum::{
    Json,
    body::Body,
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use healthai_core::Notice;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// API Key authentication state
#[derive(Clone)]
pub struct ApiKeyAuth {
    api_key: Option<String>,
}

impl ApiKeyAuth {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    /// No configured key means every request is allowed
    pub fn allows(&self, headers: &HeaderMap) -> bool {
        match &self.api_key {
            None => true,
            Some(expected) => headers
                .get(API_KEY_HEADER)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|given| given == expected),
        }
    }
}

/// Reject requests without the configured API key
pub async fn auth_middleware(request: Request<Body>, next: Next) -> Response {
    let allowed = request
        .extensions()
        .get::<ApiKeyAuth>()
        .is_none_or(|auth| auth.allows(request.headers()));

    if !allowed {
        let notice = Notice::error("unauthorized", "Missing or invalid API key");
        return (StatusCode::UNAUTHORIZED, Json(notice)).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key.parse().unwrap());
        headers
    }

    #[test]
    fn open_when_unconfigured() {
        assert!(ApiKeyAuth::new(None).allows(&HeaderMap::new()));
    }

    #[test]
    fn checks_configured_key() {
        let auth = ApiKeyAuth::new(Some("secret".into()));
        assert!(auth.allows(&headers("secret")));
        assert!(!auth.allows(&headers("guess")));
        assert!(!auth.allows(&HeaderMap::new()));
    }
}
