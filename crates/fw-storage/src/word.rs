//! First-word record storage.
//!
//! Every query is scoped by child id; a record belonging to another child
//! is treated as nonexistent.

use async_trait::async_trait;
use chrono::NaiveDate;
use fw_model::Word;
use uuid::Uuid;

use crate::error::StorageResult;

/// Storage operations for first-word records.
///
/// List results are ordered by achievement date, oldest first.
#[async_trait]
pub trait WordProvider: Send + Sync {
    /// Persists a new word record.
    async fn create(&self, word: &Word) -> StorageResult<()>;

    /// Deletes a word belonging to the given child.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the word does not exist under
    /// that child.
    async fn delete(&self, child_id: Uuid, id: Uuid) -> StorageResult<()>;

    /// Fetches a word by id, if it belongs to the given child.
    async fn get_by_id(&self, child_id: Uuid, id: Uuid) -> StorageResult<Option<Word>>;

    /// Lists all words recorded for a child.
    async fn get_by_child(&self, child_id: Uuid) -> StorageResult<Vec<Word>>;

    /// Fetches the earliest word equal to `word` after lowercasing both
    /// sides.
    async fn get_by_text(&self, child_id: Uuid, word: &str) -> StorageResult<Option<Word>>;

    /// Lists words achieved strictly before `date`.
    async fn get_before(&self, child_id: Uuid, date: NaiveDate) -> StorageResult<Vec<Word>>;

    /// Lists words achieved strictly after `date`.
    async fn get_after(&self, child_id: Uuid, date: NaiveDate) -> StorageResult<Vec<Word>>;

    /// Lists words achieved within `[start, end]`, inclusive on both ends.
    async fn get_between(
        &self,
        child_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StorageResult<Vec<Word>>;
}
