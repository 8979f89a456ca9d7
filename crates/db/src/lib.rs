//! Persistence layer for the trivia service.
//!
//! Owns the PostgreSQL pool, the embedded migrations, the row/DTO models and
//! the repositories that the API handlers call.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Connection settings for the database pool.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL connection string (`DATABASE_URL`).
    pub url: String,
    /// Upper bound on pooled connections (`DB_MAX_CONNECTIONS`, default `10`).
    pub max_connections: u32,
}

/// Create a connection pool from the given settings.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Cheap round trip used by the startup check.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded schema and seed migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await?;
    tracing::debug!("Migrations up to date");
    Ok(())
}
