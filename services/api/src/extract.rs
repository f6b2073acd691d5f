//! Request extractors whose rejections render through [`ApiError`]

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON request body
///
/// Malformed JSON, wrong field types and a missing content type all answer
/// 400 with the usual `{"error": ...}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
