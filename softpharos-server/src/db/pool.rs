//! Database connection pool management
//!
//! One sqlx `PgPool` for the whole process, built in `main` and cloned into
//! every repository.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connection limits for [`create_pool_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolOptions {
    pub max_connections: u32,
    pub min_connections: u32,
    /// Connections older than this are closed and replaced.
    pub max_lifetime: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: 100,
            min_connections: 10,
            max_lifetime: Duration::from_secs(60 * 60),
        }
    }
}

/// Create a PostgreSQL connection pool with default limits.
///
/// # Errors
///
/// Returns an error if the initial connection fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, PoolOptions::default()).await
}

/// Create a PostgreSQL connection pool with explicit limits.
///
/// `min_connections` is clamped to `max_connections`.
pub async fn create_pool_with_options(
    database_url: &str,
    options: PoolOptions,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        max = options.max_connections,
        min = options.min_connections,
        "connecting to postgres"
    );

    PgPoolOptions::new()
        .max_connections(options.max_connections)
        .min_connections(options.min_connections.min(options.max_connections))
        .max_lifetime(options.max_lifetime)
        .connect(database_url)
        .await
}
