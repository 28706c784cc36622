//! Completion-backed page endpoints (chat, predict, treatment, insights)

use axum::{Json, extract::State};
use healthai_core::{
    HealthData, Page, PatientQuestion, SymptomReport, TreatmentRequest, sample_health_data,
};
use serde::Serialize;
use std::future::Future;

use crate::ai;
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::middleware::metrics::record_completion;
use crate::state::AppState;

/// Response body for every completion-backed page
#[derive(Serialize)]
pub struct PageResponse {
    page: &'static str,
    /// Completion text, untouched
    response: String,
}

/// Await a page handler, count the completion outcome and wrap the text
async fn respond(
    page: Page,
    call: impl Future<Output = Result<String, AppError>>,
) -> Result<Json<PageResponse>, AppError> {
    let result = call.await;
    match &result {
        Ok(_) => record_completion(page, "success"),
        Err(AppError::Completion(err)) => record_completion(page, err.kind()),
        Err(_) => {}
    }

    let response = result?;
    tracing::info!(page = %page, chars = response.len(), "Page response generated");
    Ok(Json(PageResponse {
        page: page.slug(),
        response,
    }))
}

/// POST /api/chat - Answer a health question
pub async fn chat(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<PatientQuestion>,
) -> Result<Json<PageResponse>, AppError> {
    tracing::info!("Patient chat request");
    respond(
        Page::PatientChat,
        ai::chat::answer_patient_query(state.completion.as_ref(), &body),
    )
    .await
}

/// POST /api/predict - Suggest conditions for the reported symptoms
pub async fn predict(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SymptomReport>,
) -> Result<Json<PageResponse>, AppError> {
    tracing::info!(age = body.age, gender = %body.gender, "Disease prediction request");
    respond(
        Page::DiseasePrediction,
        ai::prediction::predict_disease(state.completion.as_ref(), &body),
    )
    .await
}

/// POST /api/treatment - Draft a treatment plan
pub async fn treatment(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<TreatmentRequest>,
) -> Result<Json<PageResponse>, AppError> {
    tracing::info!(age = body.age, gender = %body.gender, "Treatment plan request");
    respond(
        Page::TreatmentPlans,
        ai::treatment::generate_treatment_plan(state.completion.as_ref(), &body),
    )
    .await
}

/// POST /api/insights - Summarize the sample week
pub async fn insights(State(state): State<AppState>) -> Result<Json<PageResponse>, AppError> {
    tracing::info!("Health insights request");
    let data = sample_health_data();
    respond(
        Page::HealthAnalytics,
        ai::insights::generate_health_insights(state.completion.as_ref(), &data),
    )
    .await
}

/// GET /api/insights/data - The sample week shown above the insights button
pub async fn sample_data() -> Json<HealthData> {
    Json(sample_health_data())
}
