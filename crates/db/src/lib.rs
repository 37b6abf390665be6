//! Persistence layer: connection pool, embedded migrations, models, and
//! repositories.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

/// Shared PostgreSQL connection pool type.
pub type DbPool = sqlx::PgPool;

/// Default maximum number of pooled connections.
const MAX_CONNECTIONS: u32 = 10;

/// Create a connection pool for the given database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Run all pending embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
