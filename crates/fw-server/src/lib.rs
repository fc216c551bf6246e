//! # fw-server
//!
//! Main Axum server for the first-words service.
//!
//! Wires the PostgreSQL-backed providers into the API handler state, runs
//! pending migrations on startup, and serves the HTTP API together with
//! health check endpoints.
//!
//! ## Usage
//!
//! ```ignore
//! use fw_server::{Server, ServerConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let server = Server::new(config).await?;
//! server.run().await?;
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod providers;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use providers::StorageProviders;
pub use router::create_router;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::PgPool;
use tokio::net::TcpListener;

/// The first-words server.
pub struct Server {
    config: ServerConfig,
    pool: PgPool,
}

impl Server {
    /// Creates a new server instance.
    ///
    /// This initializes the database connection pool and validates the
    /// configuration.
    pub async fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let pool_config = fw_storage_sql::PoolConfig::new(&config.database_url)
            .with_max_connections(config.db_max_connections);
        let pool = fw_storage_sql::create_pool(&pool_config).await?;

        tracing::info!("database connection pool created");

        Ok(Self { config, pool })
    }

    /// Runs the server.
    ///
    /// This applies pending migrations, starts the HTTP server, and blocks
    /// until a shutdown signal arrives.
    pub async fn run(self) -> anyhow::Result<()> {
        fw_storage_sql::run_migrations(&self.pool).await?;

        let providers = StorageProviders::new(self.pool.clone());
        if let (Some(username), Some(password)) = (
            &self.config.bootstrap_admin_username,
            &self.config.bootstrap_admin_password,
        ) {
            providers.ensure_bootstrap_admin(username, password).await?;
        }

        let state = AppState::new(self.config.clone(), Arc::new(providers));
        let app = create_router(state);

        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("server listening on http://{addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server shutdown complete");
        Ok(())
    }

    /// Returns the database pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Creates a test router without starting the server.
    pub fn test_router(&self) -> axum::Router {
        let providers = StorageProviders::new(self.pool.clone());
        let state = AppState::new(self.config.clone(), Arc::new(providers));
        create_router(state)
    }
}

/// Waits for a shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
