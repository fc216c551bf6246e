//! Postgres-backed child storage.

use async_trait::async_trait;
use fw_model::Child;
use fw_storage::{ChildProvider, StorageError, StorageResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ChildRow;
use crate::error::from_sqlx_error;

const COLUMNS: &str = "id, parent_id, name, birth_date, gender, created_at, updated_at";

/// Child storage on a Postgres pool.
#[derive(Debug, Clone)]
pub struct PgChildProvider {
    pool: PgPool,
}

impl PgChildProvider {
    /// Creates a provider on the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChildProvider for PgChildProvider {
    async fn create(&self, child: &Child) -> StorageResult<()> {
        sqlx::query(
            "INSERT INTO children (id, parent_id, name, birth_date, gender, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(child.id)
        .bind(child.parent_id)
        .bind(&child.name)
        .bind(child.birth_date)
        .bind(child.gender.as_str())
        .bind(child.created_at)
        .bind(child.updated_at)
        .execute(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StorageResult<()> {
        // Words and milestones go with the child via FK cascade.
        let result = sqlx::query("DELETE FROM children WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("Child", id));
        }
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Child>> {
        let row = sqlx::query_as::<_, ChildRow>(&format!(
            "SELECT {COLUMNS} FROM children WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(row.map(Child::from))
    }

    async fn get_by_parent(&self, parent_id: Uuid) -> StorageResult<Vec<Child>> {
        let rows = sqlx::query_as::<_, ChildRow>(&format!(
            "SELECT {COLUMNS} FROM children WHERE parent_id = $1 ORDER BY birth_date"
        ))
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(rows.into_iter().map(Child::from).collect())
    }
}
