//! Server configuration.
//!
//! Configuration is loaded from environment variables with sensible defaults.

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host to bind to.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Database connection URL.
    pub database_url: String,

    /// Maximum database connections.
    pub db_max_connections: u32,

    /// Username for the bootstrap administrator account.
    pub bootstrap_admin_username: Option<String>,

    /// Password for the bootstrap administrator account.
    pub bootstrap_admin_password: Option<String>,

    /// Log level.
    pub log_level: String,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let host = std::env::var("FW_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("FW_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let db_max_connections = std::env::var("FW_DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let bootstrap_admin_username = std::env::var("FW_BOOTSTRAP_ADMIN_USERNAME").ok();
        let bootstrap_admin_password = std::env::var("FW_BOOTSTRAP_ADMIN_PASSWORD").ok();

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            bootstrap_admin_username,
            bootstrap_admin_password,
            log_level,
        })
    }

    /// Creates a configuration for testing.
    #[must_use]
    pub fn for_testing(database_url: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
            database_url: database_url.to_string(),
            db_max_connections: 5,
            bootstrap_admin_username: None,
            bootstrap_admin_password: None,
            log_level: "debug".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/first_words".to_string(),
            db_max_connections: 10,
            bootstrap_admin_username: None,
            bootstrap_admin_password: None,
            log_level: "info".to_string(),
        }
    }
}
