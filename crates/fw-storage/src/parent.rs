//! Parent account storage.

use async_trait::async_trait;
use fw_model::Parent;
use uuid::Uuid;

use crate::error::StorageResult;

/// Storage operations for parent accounts.
#[async_trait]
pub trait ParentProvider: Send + Sync {
    /// Persists a new parent account.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Duplicate` if the username is already taken.
    async fn create(&self, parent: &Parent) -> StorageResult<()>;

    /// Replaces a stored parent account.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the parent does not exist.
    async fn update(&self, parent: &Parent) -> StorageResult<()>;

    /// Deletes a parent account together with its children and their
    /// records.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the parent does not exist.
    async fn delete(&self, id: Uuid) -> StorageResult<()>;

    /// Fetches a parent by id.
    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Parent>>;

    /// Fetches a parent by exact username.
    async fn get_by_username(&self, username: &str) -> StorageResult<Option<Parent>>;

    /// Lists all parent accounts.
    async fn list(&self) -> StorageResult<Vec<Parent>>;
}
