//! Postgres-backed word storage.
//!
//! Every query binds the child id, so records of other children are out
//! of reach at the SQL level.

use async_trait::async_trait;
use chrono::NaiveDate;
use fw_model::Word;
use fw_storage::{StorageError, StorageResult, WordProvider};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::WordRow;
use crate::error::from_sqlx_error;

const COLUMNS: &str = "id, child_id, word, date_achieve, created_at";

/// Word storage on a Postgres pool.
#[derive(Debug, Clone)]
pub struct PgWordProvider {
    pool: PgPool,
}

impl PgWordProvider {
    /// Creates a provider on the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WordProvider for PgWordProvider {
    async fn create(&self, word: &Word) -> StorageResult<()> {
        sqlx::query(
            "INSERT INTO words (id, child_id, word, date_achieve, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(word.id)
        .bind(word.child_id)
        .bind(&word.word)
        .bind(word.date_achieve)
        .bind(word.created_at)
        .execute(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(())
    }

    async fn delete(&self, child_id: Uuid, id: Uuid) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM words WHERE child_id = $1 AND id = $2")
            .bind(child_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(from_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found("Word", id));
        }
        Ok(())
    }

    async fn get_by_id(&self, child_id: Uuid, id: Uuid) -> StorageResult<Option<Word>> {
        let row = sqlx::query_as::<_, WordRow>(&format!(
            "SELECT {COLUMNS} FROM words WHERE child_id = $1 AND id = $2"
        ))
        .bind(child_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(row.map(Word::from))
    }

    async fn get_by_child(&self, child_id: Uuid) -> StorageResult<Vec<Word>> {
        let rows = sqlx::query_as::<_, WordRow>(&format!(
            "SELECT {COLUMNS} FROM words WHERE child_id = $1 ORDER BY date_achieve"
        ))
        .bind(child_id)
        .fetch_all(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(rows.into_iter().map(Word::from).collect())
    }

    async fn get_by_text(&self, child_id: Uuid, word: &str) -> StorageResult<Option<Word>> {
        let row = sqlx::query_as::<_, WordRow>(&format!(
            "SELECT {COLUMNS} FROM words \
             WHERE child_id = $1 AND LOWER(word) = LOWER($2) \
             ORDER BY date_achieve LIMIT 1"
        ))
        .bind(child_id)
        .bind(word)
        .fetch_optional(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(row.map(Word::from))
    }

    async fn get_before(&self, child_id: Uuid, date: NaiveDate) -> StorageResult<Vec<Word>> {
        let rows = sqlx::query_as::<_, WordRow>(&format!(
            "SELECT {COLUMNS} FROM words \
             WHERE child_id = $1 AND date_achieve < $2 ORDER BY date_achieve"
        ))
        .bind(child_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(rows.into_iter().map(Word::from).collect())
    }

    async fn get_after(&self, child_id: Uuid, date: NaiveDate) -> StorageResult<Vec<Word>> {
        let rows = sqlx::query_as::<_, WordRow>(&format!(
            "SELECT {COLUMNS} FROM words \
             WHERE child_id = $1 AND date_achieve > $2 ORDER BY date_achieve"
        ))
        .bind(child_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(rows.into_iter().map(Word::from).collect())
    }

    async fn get_between(
        &self,
        child_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StorageResult<Vec<Word>> {
        let rows = sqlx::query_as::<_, WordRow>(&format!(
            "SELECT {COLUMNS} FROM words \
             WHERE child_id = $1 AND date_achieve BETWEEN $2 AND $3 ORDER BY date_achieve"
        ))
        .bind(child_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(from_sqlx_error)?;
        Ok(rows.into_iter().map(Word::from).collect())
    }
}
