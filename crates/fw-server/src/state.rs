//! Application state management.

use std::sync::Arc;

use fw_api::ApiState;
use fw_storage_sql::{PgChildProvider, PgMilestoneProvider, PgParentProvider, PgWordProvider};

use crate::config::ServerConfig;
use crate::providers::StorageProviders;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,

    /// Storage providers.
    pub providers: Arc<StorageProviders>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ServerConfig, providers: Arc<StorageProviders>) -> Self {
        Self { config, providers }
    }

    /// Builds the handler state for the API routes.
    pub fn api_state(
        &self,
    ) -> ApiState<PgParentProvider, PgChildProvider, PgWordProvider, PgMilestoneProvider> {
        ApiState::new(
            Arc::clone(&self.providers.parents),
            Arc::clone(&self.providers.children),
            Arc::clone(&self.providers.words),
            Arc::clone(&self.providers.milestones),
            Arc::clone(&self.providers.passwords),
        )
    }

    /// Returns the server configuration.
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }
}
