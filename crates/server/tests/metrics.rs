//! Prometheus output for page traffic.
//!
//! Kept in its own test binary with a single test: the first `build_app` in a
//! process owns the global recorder, so the app built first here is the one
//! whose `/metrics` sees every counter.

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value as JsonValue, json};
use std::sync::Arc;
use tower::ServiceExt;

use healthai_core::CompletionError;
use healthai_server::{
    AppState, ai::CompletionClient, config::Config, store::MemoryProfileStore,
};

struct FixedClient(Result<String, CompletionError>);

#[async_trait]
impl CompletionClient for FixedClient {
    async fn complete(
        &self,
        _system: Option<&str>,
        _prompt: &str,
    ) -> Result<String, CompletionError> {
        self.0.clone()
    }
}

fn app(reply: Result<String, CompletionError>) -> Router {
    let config = Config {
        rate_limit_rps: 1000,
        ..Config::default()
    };
    let state = AppState::new(
        Arc::new(MemoryProfileStore::new()),
        Some(Arc::new(FixedClient(reply))),
    );
    healthai_server::build_app(state, &config)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(req).await.expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    (status, bytes.to_vec())
}

fn post_chat(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn has_series(text: &str, name: &str, labels: &[&str]) -> bool {
    text.lines()
        .filter(|line| line.starts_with(&format!("{name}{{")))
        .any(|line| labels.iter().all(|label| line.contains(label)))
}

#[tokio::test]
async fn test_metrics_count_completions_by_page_and_outcome() {
    let healthy = app(Ok("Rest and fluids.".to_string()));
    let failing = app(Err(CompletionError::Api {
        status: 529,
        message: "Overloaded".to_string(),
    }));

    let question = json!({"question": "What helps a cold?"}).to_string();
    let (status, _) = send(&healthy, post_chat(&question)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&failing, post_chat(&question)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    // A malformed body is rejected as a Notice and never reaches the client
    let (status, bytes) = send(&healthy, post_chat("{\"question\":")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let notice: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(notice["severity"], "error");
    assert_eq!(notice["kind"], "bad-request");

    let (status, bytes) = send(
        &healthy,
        Request::builder()
            .uri("/metrics")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(bytes).unwrap();

    assert!(
        has_series(
            &text,
            "completion_requests_total",
            &[r#"page="chat""#, r#"outcome="success""#]
        ),
        "{text}"
    );
    assert!(
        has_series(
            &text,
            "completion_requests_total",
            &[r#"page="chat""#, r#"outcome="api""#]
        ),
        "{text}"
    );
    assert!(
        has_series(
            &text,
            "http_requests_total",
            &[r#"path="/api/chat""#, r#"status="400""#]
        ),
        "{text}"
    );
    assert!(
        !has_series(
            &text,
            "completion_requests_total",
            &[r#"outcome="bad-request""#]
        ),
        "{text}"
    );
}
