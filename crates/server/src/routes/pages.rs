//! Sidebar catalog endpoint

use axum::Json;
use healthai_core::{PageDescriptor, page};

/// GET /api/pages - Pages in sidebar order
pub async fn list() -> Json<Vec<PageDescriptor>> {
    Json(page::catalog())
}
