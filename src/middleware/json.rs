//! JSON body extractor whose rejections use the application error body.

use axum::extract::FromRequest;

use crate::error::AppError;

/// Like [`axum::Json`], but a malformed or mis-typed body becomes
/// [`AppError::Validation`] (400 `{"error": ...}`) instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
