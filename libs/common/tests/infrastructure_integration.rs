//! Integration tests for the infrastructure components
//!
//! These tests verify that the PostgreSQL database is reachable and that the
//! relief schema can be applied. They need a live database at `DATABASE_URL`
//! and are ignored by default: `cargo test -- --ignored`.

use common::database::{DatabaseConfig, health_check, init_pool, run_migrations};
use sqlx::Row;

/// Test that the schema applies cleanly twice and every table is queryable
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_infrastructure_integration() -> Result<(), Box<dyn std::error::Error>> {
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    assert!(health_check(&pool).await?, "Database health check failed");

    run_migrations(&pool).await?;
    run_migrations(&pool).await?;

    for table in [
        "donations",
        "help_requests",
        "education_offers",
        "transport_offers",
        "volunteers",
        "locations",
        "users",
        "feedback",
    ] {
        let row = sqlx::query(&format!("SELECT COUNT(*) AS total FROM {}", table))
            .fetch_one(&pool)
            .await?;
        let total: i64 = row.get("total");
        assert!(total >= 0, "{} should be queryable", table);
    }

    Ok(())
}
