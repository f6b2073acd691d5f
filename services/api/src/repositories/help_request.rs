//! Help request writes and status transitions

use common::error::{DatabaseError, DatabaseResult};
use tracing::info;
use uuid::Uuid;

use super::RecordRepository;
use crate::models::{
    Listable,
    help_request::{HelpRequest, HelpRequestStatus, NewHelpRequest},
};

impl RecordRepository<HelpRequest> {
    /// Create a new help request as `pending`
    pub async fn create(&self, new: &NewHelpRequest) -> DatabaseResult<HelpRequest> {
        info!("Creating help request in district: {}", new.district);

        let sql = format!(
            r#"
            INSERT INTO help_requests (id, name, phone, district, address, needs, category, people_count, notes, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            HelpRequest::COLUMNS
        );

        sqlx::query_as::<_, HelpRequest>(&sql)
            .bind(Uuid::new_v4())
            .bind(&new.name)
            .bind(&new.phone)
            .bind(&new.district)
            .bind(&new.address)
            .bind(&new.needs)
            .bind(&new.category)
            .bind(new.people_count)
            .bind(&new.notes)
            .bind(HelpRequestStatus::Pending.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }

    /// Set the status of a help request
    ///
    /// Unconditional write: setting the current status again succeeds and the
    /// last writer wins. Returns `None` when the id is unknown.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: HelpRequestStatus,
    ) -> DatabaseResult<Option<HelpRequest>> {
        info!("Updating help request {} to {}", id, status);

        let sql = format!(
            r#"
            UPDATE help_requests
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING {}
            "#,
            HelpRequest::COLUMNS
        );

        sqlx::query_as::<_, HelpRequest>(&sql)
            .bind(status.as_str())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }
}
