//! Donation writes

use common::error::{DatabaseError, DatabaseResult};
use tracing::info;
use uuid::Uuid;

use super::RecordRepository;
use crate::models::{
    Listable,
    donation::{DEFAULT_STATUS, Donation, NewDonation},
};

impl RecordRepository<Donation> {
    /// Create a new donation in the default status
    pub async fn create(&self, new: &NewDonation) -> DatabaseResult<Donation> {
        info!("Creating donation in district: {}", new.district);

        let sql = format!(
            r#"
            INSERT INTO donations (id, name, phone, district, address, items, category, quantity, notes, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            Donation::COLUMNS
        );

        sqlx::query_as::<_, Donation>(&sql)
            .bind(Uuid::new_v4())
            .bind(&new.name)
            .bind(&new.phone)
            .bind(&new.district)
            .bind(&new.address)
            .bind(&new.items)
            .bind(&new.category)
            .bind(&new.quantity)
            .bind(&new.notes)
            .bind(DEFAULT_STATUS)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }
}
