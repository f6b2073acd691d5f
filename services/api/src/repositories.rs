//! Repositories for database operations

use std::marker::PhantomData;

use axum::extract::FromRef;
use common::{
    error::{DatabaseError, DatabaseResult},
    pagination::{Page, PageRequest},
};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    models::{ListFilter, Listable},
    state::AppState,
};

pub mod donation;
pub mod education;
pub mod feedback;
pub mod help_request;
pub mod location;
pub mod transport;
pub mod user;
pub mod volunteer;

pub use feedback::FeedbackRepository;
pub use location::LocationRepository;
pub use user::UserRepository;

/// Repository for a table served through the shared list-query
pub struct RecordRepository<T> {
    pool: PgPool,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for RecordRepository<T> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

impl<T> FromRef<AppState> for RecordRepository<T> {
    fn from_ref(state: &AppState) -> Self {
        Self::new(state.db_pool.clone())
    }
}

impl<T> RecordRepository<T> {
    /// Create a new record repository
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

impl<T: Listable> RecordRepository<T> {
    /// Get one page of records, newest first
    pub async fn list(&self, filter: &ListFilter, request: PageRequest) -> DatabaseResult<Page<T>> {
        let mut count = QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*) FROM {}", T::TABLE));
        push_filters(&mut count, filter, T::CATEGORY_COLUMN);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        let mut select =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM {}", T::COLUMNS, T::TABLE));
        push_filters(&mut select, filter, T::CATEGORY_COLUMN);
        select
            .push(" ORDER BY created_at DESC, id ASC LIMIT ")
            .push_bind(request.limit as i64)
            .push(" OFFSET ")
            .push_bind(request.offset());

        let items = select
            .build_query_as::<T>()
            .fetch_all(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(Page::new(items, total, request))
    }

    /// Find a record by ID
    pub async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<T>> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", T::COLUMNS, T::TABLE);

        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }
}

/// Append the `WHERE` clause for a list filter
///
/// A category filter on a table without a category column is ignored.
fn push_filters(
    builder: &mut QueryBuilder<'_, Postgres>,
    filter: &ListFilter,
    category_column: Option<&str>,
) {
    builder.push(" WHERE TRUE");

    if let Some(district) = &filter.district {
        builder.push(" AND district = ").push_bind(district.clone());
    }

    if let Some(status) = &filter.status {
        builder.push(" AND status = ").push_bind(status.clone());
    }

    if let (Some(category), Some(column)) = (&filter.category, category_column) {
        builder
            .push(format!(" AND {} = ", column))
            .push_bind(category.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ListQuery,
        donation::{CreateDonationRequest, Donation},
        volunteer::Volunteer,
    };
    use common::database::{DatabaseConfig, init_pool, run_migrations};

    fn where_clause(filter: &ListFilter, category_column: Option<&str>) -> String {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT 1 FROM t");
        push_filters(&mut builder, filter, category_column);
        builder.sql().to_string()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert_eq!(
            where_clause(&ListFilter::default(), Some("category")),
            "SELECT 1 FROM t WHERE TRUE"
        );
    }

    #[test]
    fn test_filters_bind_in_order() {
        let filter = ListFilter {
            district: Some("sylhet".to_string()),
            status: Some("pending".to_string()),
            category: Some("food".to_string()),
        };
        assert_eq!(
            where_clause(&filter, Some("category")),
            "SELECT 1 FROM t WHERE TRUE AND district = $1 AND status = $2 AND category = $3"
        );
    }

    #[test]
    fn test_category_ignored_without_column() {
        let filter = ListFilter {
            category: Some("food".to_string()),
            ..Default::default()
        };
        assert_eq!(
            where_clause(&filter, Volunteer::CATEGORY_COLUMN),
            "SELECT 1 FROM t WHERE TRUE"
        );
    }

    async fn seeded_donations(district: &str, count: usize) -> RecordRepository<Donation> {
        let pool = init_pool(&DatabaseConfig::from_env().unwrap()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repository = RecordRepository::<Donation>::new(pool);

        for i in 0..count {
            let new = CreateDonationRequest {
                name: Some(format!("Donor {}", i)),
                phone: Some("01712345678".to_string()),
                district: Some(district.to_string()),
                address: Some("Ward 1".to_string()),
                items: Some("Rice".to_string()),
                category: Some(if i % 2 == 0 { "food" } else { "clothes" }.to_string()),
                ..Default::default()
            }
            .validate()
            .unwrap();
            repository.create(&new).await.unwrap();
        }

        repository
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_pages_cover_every_record_once_newest_first() {
        let district = format!("test-{}", Uuid::new_v4());
        let repository = seeded_donations(&district, 7).await;
        let query = ListQuery {
            district: Some(district.clone()),
            ..Default::default()
        };

        let first = repository
            .list(&query.filter(), PageRequest { page: 1, limit: 3 })
            .await
            .unwrap();
        assert_eq!(first.total, 7);
        assert_eq!(first.total_pages, 3);

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            let chunk = repository
                .list(&query.filter(), PageRequest { page, limit: 3 })
                .await
                .unwrap();
            seen.extend(chunk.items);
        }

        assert_eq!(seen.len(), 7);
        assert!(seen.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        let mut ids: Vec<Uuid> = seen.iter().map(|d| d.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_all_sentinel_matches_unfiltered_listing() {
        let district = format!("test-{}", Uuid::new_v4());
        let repository = seeded_donations(&district, 4).await;
        let request = PageRequest { page: 1, limit: 100 };

        let base = ListQuery {
            district: Some(district.clone()),
            ..Default::default()
        };
        let with_sentinel = ListQuery {
            category: Some("all".to_string()),
            status: Some("all".to_string()),
            ..base.clone()
        };

        let plain = repository.list(&base.filter(), request).await.unwrap();
        let sentinel = repository.list(&with_sentinel.filter(), request).await.unwrap();
        let ids = |page: &Page<Donation>| page.items.iter().map(|d| d.id).collect::<Vec<_>>();
        assert_eq!(ids(&plain), ids(&sentinel));
        assert_eq!(plain.total, 4);

        let food = ListQuery {
            category: Some("food".to_string()),
            ..base
        };
        assert_eq!(repository.list(&food.filter(), request).await.unwrap().total, 2);
    }
}
