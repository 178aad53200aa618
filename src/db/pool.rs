//! PostgreSQL connection pool and schema migrations.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::time::Duration;

pub type DbPool = sqlx::PgPool;

pub async fn create_pool(options: PgConnectOptions) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}

/// Apply the embedded migrations under `migrations/`. Already-applied ones are skipped.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}
