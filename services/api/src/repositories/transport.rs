//! Transport offer writes

use common::error::{DatabaseError, DatabaseResult};
use tracing::info;
use uuid::Uuid;

use super::RecordRepository;
use crate::models::{
    Listable,
    transport::{NewTransport, Transport},
};

impl RecordRepository<Transport> {
    pub async fn create(&self, new: &NewTransport) -> DatabaseResult<Transport> {
        info!("Creating transport offer in district: {}", new.district);

        let sql = format!(
            r#"
            INSERT INTO transport_offers (id, name, phone, district, address, vehicle_type, capacity, route, notes, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'available')
            RETURNING {}
            "#,
            Transport::COLUMNS
        );

        sqlx::query_as::<_, Transport>(&sql)
            .bind(Uuid::new_v4())
            .bind(&new.name)
            .bind(&new.phone)
            .bind(&new.district)
            .bind(&new.address)
            .bind(&new.vehicle_type)
            .bind(&new.capacity)
            .bind(&new.route)
            .bind(&new.notes)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }
}
