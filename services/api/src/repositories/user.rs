//! User repository for database operations

use common::error::{DatabaseError, DatabaseResult};
use sqlx::{PgPool, types::Json};
use tracing::info;
use uuid::Uuid;

use crate::models::user::{NewUser, ProfileUpdate, User, UserRole};

const USER_COLUMNS: &str =
    "id, name, phone, role, face_image, occupation, locations, created_at, updated_at";

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new user
    ///
    /// A duplicate phone surfaces as a unique violation.
    pub async fn create(&self, new_user: &NewUser) -> DatabaseResult<User> {
        info!("Registering new {}: {}", new_user.role.as_str(), new_user.name);

        let sql = format!(
            r#"
            INSERT INTO users (id, name, phone, role, occupation, face_image)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(Uuid::new_v4())
            .bind(&new_user.name)
            .bind(&new_user.phone)
            .bind(new_user.role.as_str())
            .bind(&new_user.occupation)
            .bind(&new_user.face_image)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<User>> {
        info!("Finding user by ID: {}", id);

        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);

        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }

    /// Get collectors with at least one embedded location in `district`
    ///
    /// All collectors when `district` is `None`. The caller still has to pick
    /// the matching entries out of each profile.
    pub async fn list_collectors(&self, district: Option<&str>) -> DatabaseResult<Vec<User>> {
        let sql = format!(
            r#"
            SELECT {}
            FROM users
            WHERE role = $1
              AND ($2::TEXT IS NULL OR EXISTS (
                  SELECT 1 FROM jsonb_array_elements(locations) AS loc
                  WHERE LOWER(regexp_replace(btrim(loc->>'district'), '\s+', ' ', 'g')) = $2
              ))
            ORDER BY created_at ASC, id ASC
            "#,
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(UserRole::Collector.as_str())
            .bind(district)
            .fetch_all(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }

    /// Apply a profile update
    ///
    /// `None` fields keep their stored value; a cleared occupation or face
    /// image is written as `NULL`.
    pub async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> DatabaseResult<Option<User>> {
        info!("Updating profile for user: {}", id);

        let sql = format!(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                occupation = CASE WHEN $3 THEN $4 ELSE occupation END,
                face_image = CASE WHEN $5 THEN $6 ELSE face_image END,
                locations = COALESCE($7, locations),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(&update.name)
            .bind(update.occupation.is_some())
            .bind(update.occupation.clone().flatten())
            .bind(update.face_image.is_some())
            .bind(update.face_image.clone().flatten())
            .bind(update.locations.as_ref().map(Json))
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }
}
