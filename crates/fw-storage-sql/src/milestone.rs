//! Postgres-backed milestone storage.
//!
//! Every query binds the child id, so records of other children are out
//! of reach at the SQL level.

use async_trait::async_trait;
use chrono::NaiveDate;
use fw_model::Milestone;
use fw_storage::{MilestoneProvider, StorageError, StorageResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::MilestoneRow;
use crate::error::from_sqlx_error;

const COLUMNS: &str = "id, child_id, title, description, date_achieve, created_at, updated_at";

/// Milestone storage on a Postgres pool.
#[derive(Debug, Clone)]
pub struct PgMilestoneProvider {
    pool: PgPool,
}

impl PgMilestoneProvider {
    /// Creates a provider on the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MilestoneProvider for PgMilestoneProvider {
    async fn create(&self, milestone: &Milestone) -> StorageResult<()> {
        sqlx::query(
            "INSERT INTO milestones \
             (id, child_id, title, description, date_achieve, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(milestone.id)
        .bind(milestone.child_id)
        .bind(&milestone.title)
        .bind(&milestone.description)
        .bind(milestone.date_achieve)
        .bind(milestone.created_at)
        .bind(milestone.updated_at)
        .execute(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(())
    }

    async fn update(&self, milestone: &Milestone) -> StorageResult<()> {
        let result = sqlx::query(
            "UPDATE milestones \
             SET title = $3, description = $4, date_achieve = $5, updated_at = $6 \
             WHERE child_id = $1 AND id = $2",
        )
        .bind(milestone.child_id)
        .bind(milestone.id)
        .bind(&milestone.title)
        .bind(&milestone.description)
        .bind(milestone.date_achieve)
        .bind(milestone.updated_at)
        .execute(&self.pool)
        .await
        .map_err(from_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("Milestone", milestone.id));
        }
        Ok(())
    }

    async fn delete(&self, child_id: Uuid, id: Uuid) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM milestones WHERE child_id = $1 AND id = $2")
            .bind(child_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("Milestone", id));
        }
        Ok(())
    }

    async fn get_by_id(&self, child_id: Uuid, id: Uuid) -> StorageResult<Option<Milestone>> {
        let row = sqlx::query_as::<_, MilestoneRow>(&format!(
            "SELECT {COLUMNS} FROM milestones WHERE child_id = $1 AND id = $2"
        ))
        .bind(child_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(row.map(Milestone::from))
    }

    async fn get_by_child(&self, child_id: Uuid) -> StorageResult<Vec<Milestone>> {
        let rows = sqlx::query_as::<_, MilestoneRow>(&format!(
            "SELECT {COLUMNS} FROM milestones WHERE child_id = $1 ORDER BY date_achieve"
        ))
        .bind(child_id)
        .fetch_all(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(rows.into_iter().map(Milestone::from).collect())
    }

    async fn search_by_title(
        &self,
        child_id: Uuid,
        fragment: &str,
    ) -> StorageResult<Vec<Milestone>> {
        let rows = sqlx::query_as::<_, MilestoneRow>(&format!(
            "SELECT {COLUMNS} FROM milestones \
             WHERE child_id = $1 AND title ILIKE '%' || $2 || '%' ORDER BY date_achieve"
        ))
        .bind(child_id)
        .bind(fragment)
        .fetch_all(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(rows.into_iter().map(Milestone::from).collect())
    }

    async fn get_by_title(&self, child_id: Uuid, title: &str) -> StorageResult<Option<Milestone>> {
        let row = sqlx::query_as::<_, MilestoneRow>(&format!(
            "SELECT {COLUMNS} FROM milestones \
             WHERE child_id = $1 AND LOWER(title) = LOWER($2) \
             ORDER BY date_achieve LIMIT 1"
        ))
        .bind(child_id)
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(row.map(Milestone::from))
    }

    async fn get_before(&self, child_id: Uuid, date: NaiveDate) -> StorageResult<Vec<Milestone>> {
        let rows = sqlx::query_as::<_, MilestoneRow>(&format!(
            "SELECT {COLUMNS} FROM milestones \
             WHERE child_id = $1 AND date_achieve < $2 ORDER BY date_achieve"
        ))
        .bind(child_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(rows.into_iter().map(Milestone::from).collect())
    }

    async fn get_after(&self, child_id: Uuid, date: NaiveDate) -> StorageResult<Vec<Milestone>> {
        let rows = sqlx::query_as::<_, MilestoneRow>(&format!(
            "SELECT {COLUMNS} FROM milestones \
             WHERE child_id = $1 AND date_achieve > $2 ORDER BY date_achieve"
        ))
        .bind(child_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(rows.into_iter().map(Milestone::from).collect())
    }

    async fn get_between(
        &self,
        child_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StorageResult<Vec<Milestone>> {
        let rows = sqlx::query_as::<_, MilestoneRow>(&format!(
            "SELECT {COLUMNS} FROM milestones \
             WHERE child_id = $1 AND date_achieve BETWEEN $2 AND $3 ORDER BY date_achieve"
        ))
        .bind(child_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(rows.into_iter().map(Milestone::from).collect())
    }
}
