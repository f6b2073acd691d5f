//! Feedback repository for database operations

use common::{
    error::{DatabaseError, DatabaseResult},
    pagination::{Page, PageRequest},
};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::feedback::{Feedback, NewFeedback};

#[derive(Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: &NewFeedback) -> DatabaseResult<Feedback> {
        info!("Storing feedback from: {}", new.name);

        sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO feedback (id, name, phone, message, rating)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, phone, message, rating, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(&new.phone)
        .bind(&new.message)
        .bind(new.rating)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }

    /// Get feedback with pagination, newest first
    pub async fn list(&self, request: PageRequest) -> DatabaseResult<Page<Feedback>> {
        let items = sqlx::query_as::<_, Feedback>(
            r#"
            SELECT id, name, phone, message, rating, created_at, updated_at
            FROM feedback
            ORDER BY created_at DESC, id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(request.limit as i64)
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback")
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(Page::new(items, total, request))
    }
}
