//! Drop-off location handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use common::{filter, pagination::Page};
use uuid::Uuid;

use super::invalid;
use crate::{
    error::{ApiError, ApiResult},
    extract::AppJson,
    location_merge::{DropOffPoint, merge_drop_off_points},
    models::{
        ListQuery, ListResponse,
        location::{self, CreateLocationRequest, Location},
    },
    state::AppState,
};

/// List active standalone locations together with collector locations
///
/// Only the district filter applies here; `status` and `category` are ignored.
pub async fn list_locations(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ListResponse<DropOffPoint>>> {
    let request = query.page_request(location::DEFAULT_LIMIT);
    let district = filter::district(query.district.as_deref());

    let (standalone, collectors) = tokio::try_join!(
        state.location_repository.list_active(district.as_deref()),
        state.user_repository.list_collectors(district.as_deref()),
    )?;

    let points = merge_drop_off_points(standalone, &collectors, district.as_deref(), Utc::now());

    Ok(Json(ListResponse::items(Page::from_vec(points, request))))
}

/// Submit a standalone drop-off location
pub async fn create_location(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateLocationRequest>,
) -> ApiResult<impl IntoResponse> {
    let new = payload.validate().map_err(invalid)?;
    let location = state.location_repository.create(&new).await?;

    Ok((StatusCode::CREATED, Json(location)))
}

/// Get a standalone location by ID
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Location>> {
    let location = state
        .location_repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Location".to_string()))?;

    Ok(Json(location))
}
