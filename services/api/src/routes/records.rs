//! Handlers for the listable resources

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use super::invalid;
use crate::{
    error::{ApiError, ApiResult},
    extract::AppJson,
    models::{
        ListQuery, ListResponse, Listable, UpdateStatusRequest,
        donation::{CreateDonationRequest, Donation},
        education::{CreateEducationRequest, Education},
        help_request::{CreateHelpRequestRequest, HelpRequest, HelpRequestStatus},
        transport::{CreateTransportRequest, Transport},
        volunteer::{CreateVolunteerRequest, Volunteer},
    },
    repositories::RecordRepository,
};

/// List records with filters and pagination, newest first
pub async fn list_records<T: Listable>(
    State(repository): State<RecordRepository<T>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ListResponse<T>>> {
    let page = repository
        .list(&query.filter(), query.page_request(T::DEFAULT_LIMIT))
        .await?;

    Ok(Json(ListResponse::records(page)))
}

/// Get a record by ID
pub async fn get_record<T: Listable>(
    State(repository): State<RecordRepository<T>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<T>> {
    let record = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(T::LABEL.to_string()))?;

    Ok(Json(record))
}

/// Submit a donation offer
pub async fn create_donation(
    State(repository): State<RecordRepository<Donation>>,
    AppJson(payload): AppJson<CreateDonationRequest>,
) -> ApiResult<impl IntoResponse> {
    let new = payload.validate().map_err(invalid)?;
    let donation = repository.create(&new).await?;

    Ok((StatusCode::CREATED, Json(donation)))
}

/// Submit a help request
pub async fn create_help_request(
    State(repository): State<RecordRepository<HelpRequest>>,
    AppJson(payload): AppJson<CreateHelpRequestRequest>,
) -> ApiResult<impl IntoResponse> {
    let new = payload.validate().map_err(invalid)?;
    let help_request = repository.create(&new).await?;

    Ok((StatusCode::CREATED, Json(help_request)))
}

/// Move a help request to a new status
///
/// Any transition between the known statuses is allowed, including setting
/// the current one again.
pub async fn update_help_request_status(
    State(repository): State<RecordRepository<HelpRequest>>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<UpdateStatusRequest>,
) -> ApiResult<Json<HelpRequest>> {
    let status: HelpRequestStatus = payload
        .status
        .as_deref()
        .ok_or_else(|| invalid("status is required".to_string()))?
        .parse()
        .map_err(invalid)?;

    let help_request = repository
        .update_status(id, status)
        .await?
        .ok_or_else(|| ApiError::NotFound(HelpRequest::LABEL.to_string()))?;

    Ok(Json(help_request))
}

/// Offer teaching
pub async fn create_education(
    State(repository): State<RecordRepository<Education>>,
    AppJson(payload): AppJson<CreateEducationRequest>,
) -> ApiResult<impl IntoResponse> {
    let new = payload.validate().map_err(invalid)?;
    let offer = repository.create(&new).await?;

    Ok((StatusCode::CREATED, Json(offer)))
}

/// Offer a vehicle
pub async fn create_transport(
    State(repository): State<RecordRepository<Transport>>,
    AppJson(payload): AppJson<CreateTransportRequest>,
) -> ApiResult<impl IntoResponse> {
    let new = payload.validate().map_err(invalid)?;
    let offer = repository.create(&new).await?;

    Ok((StatusCode::CREATED, Json(offer)))
}

/// Sign up as a volunteer
pub async fn create_volunteer(
    State(repository): State<RecordRepository<Volunteer>>,
    AppJson(payload): AppJson<CreateVolunteerRequest>,
) -> ApiResult<impl IntoResponse> {
    let new = payload.validate().map_err(invalid)?;
    let volunteer = repository.create(&new).await?;

    Ok((StatusCode::CREATED, Json(volunteer)))
}
