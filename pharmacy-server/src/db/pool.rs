//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Connections are handed
//! out as RAII guards, so every acquire is paired with a release.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::{ConfigError, DbConfig};

fn pool_options(config: &DbConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
}

/// Create a PostgreSQL connection pool, connecting eagerly.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the first
/// connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::from_env()?).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, PoolError> {
    let options = config.connect_options()?;
    let pool = pool_options(config).connect_with(options).await?;
    Ok(pool)
}

/// Create a pool that opens connections on first use.
///
/// The HTTP layer uses this so the server starts (and `/` keeps serving)
/// while the database is down.
pub fn create_lazy_pool(config: &DbConfig) -> Result<PgPool, ConfigError> {
    let options = config.connect_options()?;
    Ok(pool_options(config).connect_lazy_with(options))
}

/// Pool construction errors
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Db(#[from] super::DbError),
}

impl From<sqlx::Error> for PoolError {
    fn from(err: sqlx::Error) -> Self {
        Self::Db(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn lazy_pool_does_not_connect() {
        let config = DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            ..DbConfig::default()
        };
        let pool = create_lazy_pool(&config).expect("lazy pool");
        assert_eq!(pool.size(), 0);
    }

    #[tokio::test]
    async fn unreachable_database_is_connection_error() {
        let config = DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            acquire_timeout: Duration::from_millis(500),
            ..DbConfig::default()
        };
        let err = create_pool(&config).await.unwrap_err();
        match err {
            PoolError::Db(db) => assert!(db.is_connection()),
            other => panic!("expected connection error, got {other:?}"),
        }
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p pharmacy-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let config = DbConfig::from_env().expect("config");
        let pool = create_pool(&config).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
