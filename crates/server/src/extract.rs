//! Request extractors whose rejections render as a `Notice`

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json`, but a bad body becomes an `AppError::BadRequest`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
