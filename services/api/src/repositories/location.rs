//! Location repository for database operations

use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::location::{Location, NewLocation, STATUS_ACTIVE};

const LOCATION_COLUMNS: &str = "id, name, district, address, description, start_date, start_time, \
                                end_date, end_time, images, collector_id, status, created_at, updated_at";

/// Location repository for database operations
#[derive(Clone)]
pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    /// Create a new location repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new active location
    pub async fn create(&self, new: &NewLocation) -> DatabaseResult<Location> {
        info!("Creating location '{}' in district: {}", new.name, new.district);

        let sql = format!(
            r#"
            INSERT INTO locations (id, name, district, address, description, start_date, start_time,
                                   end_date, end_time, images, collector_id, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            LOCATION_COLUMNS
        );

        sqlx::query_as::<_, Location>(&sql)
            .bind(Uuid::new_v4())
            .bind(&new.name)
            .bind(&new.district)
            .bind(&new.address)
            .bind(&new.description)
            .bind(&new.start_date)
            .bind(&new.start_time)
            .bind(&new.end_date)
            .bind(&new.end_time)
            .bind(&new.images)
            .bind(new.collector_id)
            .bind(STATUS_ACTIVE)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }

    /// Find a location by ID
    pub async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<Location>> {
        let sql = format!("SELECT {} FROM locations WHERE id = $1", LOCATION_COLUMNS);

        sqlx::query_as::<_, Location>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }

    /// Get every active location, newest first
    ///
    /// Unpaginated: the caller merges these with collector locations before
    /// slicing a page.
    pub async fn list_active(&self, district: Option<&str>) -> DatabaseResult<Vec<Location>> {
        let sql = format!(
            r#"
            SELECT {}
            FROM locations
            WHERE status = $1 AND ($2::TEXT IS NULL OR district = $2)
            ORDER BY created_at DESC, id ASC
            "#,
            LOCATION_COLUMNS
        );

        sqlx::query_as::<_, Location>(&sql)
            .bind(STATUS_ACTIVE)
            .bind(district)
            .fetch_all(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }
}
