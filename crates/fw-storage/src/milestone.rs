//! Milestone record storage.
//!
//! Every query is scoped by child id; a record belonging to another child
//! is treated as nonexistent.

use async_trait::async_trait;
use chrono::NaiveDate;
use fw_model::Milestone;
use uuid::Uuid;

use crate::error::StorageResult;

/// Storage operations for milestone records.
///
/// List results are ordered by achievement date, oldest first.
#[async_trait]
pub trait MilestoneProvider: Send + Sync {
    /// Persists a new milestone.
    async fn create(&self, milestone: &Milestone) -> StorageResult<()>;

    /// Replaces a stored milestone.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the milestone does not exist
    /// under its child.
    async fn update(&self, milestone: &Milestone) -> StorageResult<()>;

    /// Deletes a milestone belonging to the given child.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::NotFound` if the milestone does not exist
    /// under that child.
    async fn delete(&self, child_id: Uuid, id: Uuid) -> StorageResult<()>;

    /// Fetches a milestone by id, if it belongs to the given child.
    async fn get_by_id(&self, child_id: Uuid, id: Uuid) -> StorageResult<Option<Milestone>>;

    /// Lists all milestones recorded for a child.
    async fn get_by_child(&self, child_id: Uuid) -> StorageResult<Vec<Milestone>>;

    /// Lists milestones whose lowercased title contains the lowercased
    /// `fragment`. An empty result is not an error.
    async fn search_by_title(
        &self,
        child_id: Uuid,
        fragment: &str,
    ) -> StorageResult<Vec<Milestone>>;

    /// Fetches the earliest milestone whose title equals `title` after
    /// lowercasing both sides.
    async fn get_by_title(&self, child_id: Uuid, title: &str) -> StorageResult<Option<Milestone>>;

    /// Lists milestones achieved strictly before `date`.
    async fn get_before(&self, child_id: Uuid, date: NaiveDate) -> StorageResult<Vec<Milestone>>;

    /// Lists milestones achieved strictly after `date`.
    async fn get_after(&self, child_id: Uuid, date: NaiveDate) -> StorageResult<Vec<Milestone>>;

    /// Lists milestones achieved within `[start, end]`, inclusive on both
    /// ends.
    async fn get_between(
        &self,
        child_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StorageResult<Vec<Milestone>>;
}
