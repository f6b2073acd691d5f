//! Feedback handlers

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::invalid;
use crate::{
    error::ApiResult,
    extract::AppJson,
    models::{
        ListQuery, ListResponse,
        feedback::{self, CreateFeedbackRequest, Feedback},
    },
    state::AppState,
};

/// List feedback, newest first
pub async fn list_feedback(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ListResponse<Feedback>>> {
    let page = state
        .feedback_repository
        .list(query.page_request(feedback::DEFAULT_LIMIT))
        .await?;

    Ok(Json(ListResponse::records(page)))
}

/// Leave feedback
pub async fn create_feedback(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateFeedbackRequest>,
) -> ApiResult<impl IntoResponse> {
    let new = payload.validate().map_err(invalid)?;
    let feedback = state.feedback_repository.create(&new).await?;

    Ok((StatusCode::CREATED, Json(feedback)))
}
