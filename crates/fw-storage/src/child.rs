//! Child storage.

use async_trait::async_trait;
use fw_model::Child;
use uuid::Uuid;

use crate::error::StorageResult;

/// Storage operations for children.
#[async_trait]
pub trait ChildProvider: Send + Sync {
    /// Persists a new child.
    async fn create(&self, child: &Child) -> StorageResult<()>;

    /// Deletes a child together with its records.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the child does not exist.
    async fn delete(&self, id: Uuid) -> StorageResult<()>;

    /// Fetches a child by id.
    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Child>>;

    /// Lists the children owned by a parent.
    async fn get_by_parent(&self, parent_id: Uuid) -> StorageResult<Vec<Child>>;
}
