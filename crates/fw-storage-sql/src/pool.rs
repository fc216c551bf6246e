//! Connection pool and schema migrations.

use std::time::Duration;

use fw_storage::{StorageError, StorageResult};
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Connection pool configuration.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Postgres connection URL.
    pub database_url: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
    /// Seconds to wait for a free connection before giving up.
    pub acquire_timeout_secs: u64,
}

impl PoolConfig {
    /// Creates a configuration for the given database URL.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 10,
            acquire_timeout_secs: 5,
        }
    }

    /// Sets the maximum number of connections (builder pattern).
    #[must_use]
    pub const fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

/// Creates a Postgres connection pool.
///
/// ## Errors
///
/// Returns `StorageError::Connection` if the database cannot be reached.
pub async fn create_pool(config: &PoolConfig) -> StorageResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.database_url)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))
}

/// Applies the bundled schema migrations.
///
/// ## Errors
///
/// Returns `StorageError::Internal` if a migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> StorageResult<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| StorageError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = PoolConfig::new("postgres://localhost/firstwords").with_max_connections(2);

        assert_eq!(config.database_url, "postgres://localhost/firstwords");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.acquire_timeout_secs, 5);
    }
}
