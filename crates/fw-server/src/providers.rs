//! Storage provider wiring for the server.

use std::sync::Arc;

use fw_auth::PasswordService;
use fw_model::{Parent, Role};
use fw_storage::ParentProvider;
use fw_storage_sql::{PgChildProvider, PgMilestoneProvider, PgParentProvider, PgWordProvider};
use sqlx::PgPool;

/// Aggregate storage providers backed by PostgreSQL.
#[derive(Clone)]
pub struct StorageProviders {
    /// Parent account provider.
    pub parents: Arc<PgParentProvider>,

    /// Child provider.
    pub children: Arc<PgChildProvider>,

    /// Word record provider.
    pub words: Arc<PgWordProvider>,

    /// Milestone record provider.
    pub milestones: Arc<PgMilestoneProvider>,

    /// Password policy and hashing.
    pub passwords: Arc<PasswordService>,
}

impl StorageProviders {
    /// Creates storage providers over the given database pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            parents: Arc::new(PgParentProvider::new(pool.clone())),
            children: Arc::new(PgChildProvider::new(pool.clone())),
            words: Arc::new(PgWordProvider::new(pool.clone())),
            milestones: Arc::new(PgMilestoneProvider::new(pool)),
            passwords: Arc::new(PasswordService::default()),
        }
    }

    /// Creates the bootstrap administrator account if it does not exist.
    ///
    /// ## Errors
    ///
    /// Returns an error when the password fails the policy or storage is
    /// unavailable.
    pub async fn ensure_bootstrap_admin(&self, username: &str, password: &str) -> anyhow::Result<()> {
        if self.parents.get_by_username(username).await?.is_some() {
            tracing::debug!(username, "bootstrap admin already present");
            return Ok(());
        }

        self.passwords.check_policy(password)?;
        let hash = self.passwords.hash(password)?;
        let admin =
            Parent::new(username, hash, format!("{username}@localhost")).with_role(Role::Admin);
        self.parents.create(&admin).await?;
        tracing::info!(username, "bootstrap admin created");
        Ok(())
    }
}
