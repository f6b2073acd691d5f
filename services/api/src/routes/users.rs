//! User registration and profile handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use super::invalid;
use crate::{
    error::{ApiError, ApiResult},
    extract::AppJson,
    middleware::AuthUser,
    models::user::{CreateUserRequest, UpdateProfileRequest, User},
    state::AppState,
};

/// Register a donor or collector
pub async fn register_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    let new_user = payload.validate().map_err(invalid)?;

    let user = state
        .user_repository
        .create(&new_user)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                ApiError::Conflict("Phone number already registered".to_string())
            } else {
                ApiError::Database(e)
            }
        })?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<User>> {
    let user = state
        .user_repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User".to_string()))?;

    Ok(Json(user))
}

/// Replace profile fields of the authenticated user
///
/// A submitted `locations` list replaces the stored one wholesale.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<UpdateProfileRequest>,
) -> ApiResult<Json<User>> {
    if auth_user.id != id {
        warn!("User {} attempted to edit profile of {}", auth_user.id, id);
        return Err(ApiError::Forbidden);
    }

    let user = state
        .user_repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User".to_string()))?;

    let update = payload.validate(&user, Utc::now()).map_err(invalid)?;

    let updated = state
        .user_repository
        .update_profile(id, &update)
        .await?
        .ok_or_else(|| ApiError::NotFound("User".to_string()))?;

    info!("Updated profile of user {}", id);

    Ok(Json(updated))
}
