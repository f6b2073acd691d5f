//! Application state shared across handlers

use sqlx::PgPool;

use crate::{
    middleware::JwtVerifier,
    repositories::{FeedbackRepository, LocationRepository, UserRepository},
};

/// Application state shared across handlers
///
/// Record repositories for the listable resources are derived from the pool
/// on demand through `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub user_repository: UserRepository,
    pub location_repository: LocationRepository,
    pub feedback_repository: FeedbackRepository,
    /// Absent when no public key is configured; profile edits are then refused
    pub jwt_verifier: Option<JwtVerifier>,
}

impl AppState {
    pub fn new(db_pool: PgPool, jwt_verifier: Option<JwtVerifier>) -> Self {
        Self {
            user_repository: UserRepository::new(db_pool.clone()),
            location_repository: LocationRepository::new(db_pool.clone()),
            feedback_repository: FeedbackRepository::new(db_pool.clone()),
            db_pool,
            jwt_verifier,
        }
    }
}
