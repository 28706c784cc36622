//! Prometheus metrics collection
//!
//! `http_requests_total` and `http_request_duration_seconds` are recorded for
//! every request, labelled by the matched route so unknown paths collapse into
//! one series. `completion_requests_total` counts calls to the completion
//! service per page and outcome.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use healthai_core::Page;
use std::time::Instant;

/// Route label for a request
fn route_label(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string())
}

/// Middleware that records request count and duration metrics.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = route_label(&request);

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();

    metrics::counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status
    )
    .increment(1);

    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path
    )
    .record(duration);

    response
}

/// Count one completion call for `page`
pub fn record_completion(page: Page, outcome: &'static str) {
    metrics::counter!(
        "completion_requests_total",
        "page" => page.slug(),
        "outcome" => outcome
    )
    .increment(1);
}
