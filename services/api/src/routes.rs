//! API service routes

use axum::{
    Json, Router,
    middleware,
    response::IntoResponse,
    routing::{get, patch, post, put},
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::{
    error::ApiError,
    middleware::auth_middleware,
    models::{
        donation::Donation, education::Education, help_request::HelpRequest,
        transport::Transport, volunteer::Volunteer,
    },
    state::AppState,
};

mod feedback;
mod locations;
mod records;
mod users;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/api/users/:id/profile", put(users::update_profile))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/donations",
            get(records::list_records::<Donation>).post(records::create_donation),
        )
        .route("/api/donations/:id", get(records::get_record::<Donation>))
        .route(
            "/api/help-requests",
            get(records::list_records::<HelpRequest>).post(records::create_help_request),
        )
        .route(
            "/api/help-requests/:id",
            get(records::get_record::<HelpRequest>),
        )
        .route(
            "/api/help-requests/:id/status",
            patch(records::update_help_request_status),
        )
        .route(
            "/api/education",
            get(records::list_records::<Education>).post(records::create_education),
        )
        .route("/api/education/:id", get(records::get_record::<Education>))
        .route(
            "/api/transport",
            get(records::list_records::<Transport>).post(records::create_transport),
        )
        .route("/api/transport/:id", get(records::get_record::<Transport>))
        .route(
            "/api/volunteers",
            get(records::list_records::<Volunteer>).post(records::create_volunteer),
        )
        .route("/api/volunteers/:id", get(records::get_record::<Volunteer>))
        .route(
            "/api/locations",
            get(locations::list_locations).post(locations::create_location),
        )
        .route("/api/locations/:id", get(locations::get_location))
        .route(
            "/api/feedback",
            get(feedback::list_feedback).post(feedback::create_feedback),
        )
        .route("/api/users", post(users::register_user))
        .route("/api/users/:id", get(users::get_user))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "relief-api"
    }))
}

/// Turn a validation message into a 400
fn invalid(message: String) -> ApiError {
    warn!("Rejecting request: {}", message);
    ApiError::BadRequest(message)
}
