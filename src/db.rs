//! Connection pool construction and schema migrations

use std::time::Duration;

use sqlx::{
    migrate::Migrator,
    postgres::{PgPool, PgPoolOptions},
};

use crate::{config::DatabaseConfig, error::AppResult};

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
}

/// Create the process-wide connection pool and open its first connection
pub async fn connect(config: &DatabaseConfig) -> AppResult<PgPool> {
    let pool = pool_options(config).connect(&config.url).await?;
    tracing::info!(
        max_connections = config.max_connections,
        "Connected to database"
    );
    Ok(pool)
}

/// Create the pool without connecting; connections are opened on first use
pub fn connect_lazy(config: &DatabaseConfig) -> AppResult<PgPool> {
    Ok(pool_options(config).connect_lazy(&config.url)?)
}

/// Apply pending migrations
pub async fn migrate(pool: &PgPool) -> AppResult<()> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations completed");
    Ok(())
}
