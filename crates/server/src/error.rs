//! Application error handling

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use healthai_core::{CompletionError, InputError, Notice};

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Empty required input; nothing was sent upstream
    Warning(String),
    BadRequest(String),
    NotFound(String),
    Completion(CompletionError),
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Warning(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Completion(CompletionError::NotConfigured) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Completion(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let notice = match self {
            AppError::Warning(msg) => Notice::warning(&msg),
            AppError::BadRequest(msg) => Notice::error("bad-request", &msg),
            AppError::NotFound(msg) => Notice::error("not-found", &msg),
            AppError::Completion(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "Completion call failed");
                Notice::error(err.kind(), &format!("Error: {}", err))
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                Notice::error("internal", &msg)
            }
        };

        (status, Json(notice)).into_response()
    }
}

impl From<InputError> for AppError {
    fn from(err: InputError) -> Self {
        AppError::Warning(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        AppError::Completion(err)
    }
}

impl From<deadpool_postgres::PoolError> for AppError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        AppError::Internal(format!("Database pool error: {}", err))
    }
}

impl From<tokio_postgres::Error> for AppError {
    fn from(err: tokio_postgres::Error) -> Self {
        AppError::Internal(format!("Database error: {}", err))
    }
}
