//! Database row types.
//!
//! Rows mirror the SQL schema one to one; `convert` turns them into
//! domain models.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `parents` table.
#[derive(Debug, Clone, FromRow)]
pub struct ParentRow {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    /// Role names as stored, e.g. `["PARENT", "ADMIN"]`.
    pub roles: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row of the `children` table.
#[derive(Debug, Clone, FromRow)]
pub struct ChildRow {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row of the `words` table.
#[derive(Debug, Clone, FromRow)]
pub struct WordRow {
    pub id: Uuid,
    pub child_id: Uuid,
    pub word: String,
    pub date_achieve: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Row of the `milestones` table.
#[derive(Debug, Clone, FromRow)]
pub struct MilestoneRow {
    pub id: Uuid,
    pub child_id: Uuid,
    pub title: String,
    pub description: String,
    pub date_achieve: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
