//! Postgres-backed parent storage.

use async_trait::async_trait;
use fw_model::Parent;
use fw_storage::{ParentProvider, StorageError, StorageResult};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ParentRow;
use crate::error::{from_insert_error, from_sqlx_error};

const COLUMNS: &str = "id, username, password_hash, email, roles, created_at, updated_at";

/// Parent storage on a Postgres pool.
#[derive(Debug, Clone)]
pub struct PgParentProvider {
    pool: PgPool,
}

impl PgParentProvider {
    /// Creates a provider on the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParentProvider for PgParentProvider {
    async fn create(&self, parent: &Parent) -> StorageResult<()> {
        sqlx::query(
            "INSERT INTO parents (id, username, password_hash, email, roles, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(parent.id)
        .bind(&parent.username)
        .bind(&parent.password_hash)
        .bind(&parent.email)
        .bind(Json(&parent.roles))
        .bind(parent.created_at)
        .bind(parent.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| from_insert_error(e, "Parent", "username", &parent.username))?;
        Ok(())
    }

    async fn update(&self, parent: &Parent) -> StorageResult<()> {
        let result = sqlx::query(
            "UPDATE parents \
             SET username = $2, password_hash = $3, email = $4, roles = $5, updated_at = $6 \
             WHERE id = $1",
        )
        .bind(parent.id)
        .bind(&parent.username)
        .bind(&parent.password_hash)
        .bind(&parent.email)
        .bind(Json(&parent.roles))
        .bind(parent.updated_at)
        .execute(&self.pool)
        .await
        .map_err(from_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("Parent", parent.id));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StorageResult<()> {
        // Children and their records go with the parent via FK cascade.
        let result = sqlx::query("DELETE FROM parents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("Parent", id));
        }
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Parent>> {
        let row = sqlx::query_as::<_, ParentRow>(&format!(
            "SELECT {COLUMNS} FROM parents WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(row.map(Parent::from))
    }

    async fn get_by_username(&self, username: &str) -> StorageResult<Option<Parent>> {
        let row = sqlx::query_as::<_, ParentRow>(&format!(
            "SELECT {COLUMNS} FROM parents WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(row.map(Parent::from))
    }

    async fn list(&self) -> StorageResult<Vec<Parent>> {
        let rows = sqlx::query_as::<_, ParentRow>(&format!(
            "SELECT {COLUMNS} FROM parents ORDER BY username"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(rows.into_iter().map(Parent::from).collect())
    }
}
