pub mod assist;
pub mod dashboard;
pub mod health;
pub mod metrics;
pub mod pages;
pub mod profile;

use axum::{
    Router,
    http::Uri,
    routing::{MethodRouter, get, post},
};
use healthai_core::Page;

use crate::error::AppError;
use crate::state::AppState;

/// Handler behind each sidebar page
fn page_route(page: Page) -> MethodRouter<AppState> {
    match page {
        Page::PatientChat => post(assist::chat),
        Page::DiseasePrediction => post(assist::predict),
        Page::TreatmentPlans => post(assist::treatment),
        Page::HealthAnalytics => post(assist::insights),
        Page::PatientProfile => get(profile::read).put(profile::update),
    }
}

/// Build `/api` routes: one per page plus the sidebar catalog
pub fn api_routes() -> Router<AppState> {
    let router = Page::ALL
        .into_iter()
        .fold(Router::new(), |router, page| {
            router.route(&format!("/{}", page.slug()), page_route(page))
        });

    router
        .route("/pages", get(pages::list))
        .route("/insights/data", get(assist::sample_data))
}

/// Fallback for paths outside the dashboard and its API
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
