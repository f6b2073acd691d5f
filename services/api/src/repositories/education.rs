//! Education offer writes

use common::error::{DatabaseError, DatabaseResult};
use tracing::info;
use uuid::Uuid;

use super::RecordRepository;
use crate::models::{
    Listable,
    education::{Education, NewEducation},
};

impl RecordRepository<Education> {
    pub async fn create(&self, new: &NewEducation) -> DatabaseResult<Education> {
        info!("Creating education offer in district: {}", new.district);

        let sql = format!(
            r#"
            INSERT INTO education_offers (id, name, phone, district, address, subjects, level, mode, notes, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'available')
            RETURNING {}
            "#,
            Education::COLUMNS
        );

        sqlx::query_as::<_, Education>(&sql)
            .bind(Uuid::new_v4())
            .bind(&new.name)
            .bind(&new.phone)
            .bind(&new.district)
            .bind(&new.address)
            .bind(&new.subjects)
            .bind(&new.level)
            .bind(&new.mode)
            .bind(&new.notes)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }
}
