//! Volunteer registration writes

use common::error::{DatabaseError, DatabaseResult};
use tracing::info;
use uuid::Uuid;

use super::RecordRepository;
use crate::models::{
    Listable,
    volunteer::{NewVolunteer, Volunteer},
};

impl RecordRepository<Volunteer> {
    pub async fn create(&self, new: &NewVolunteer) -> DatabaseResult<Volunteer> {
        info!("Registering volunteer in district: {}", new.district);

        let sql = format!(
            r#"
            INSERT INTO volunteers (id, name, phone, district, address, skills, availability, notes, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'available')
            RETURNING {}
            "#,
            Volunteer::COLUMNS
        );

        sqlx::query_as::<_, Volunteer>(&sql)
            .bind(Uuid::new_v4())
            .bind(&new.name)
            .bind(&new.phone)
            .bind(&new.district)
            .bind(&new.address)
            .bind(&new.skills)
            .bind(&new.availability)
            .bind(&new.notes)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }
}
