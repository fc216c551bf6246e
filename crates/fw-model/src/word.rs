//! First-word record domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A first word spoken by a child.
///
/// Words are append-only records: they are created and deleted, never
/// edited in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// Unique identifier.
    pub id: Uuid,
    /// Child this word belongs to.
    pub child_id: Uuid,
    /// The word as spoken.
    pub word: String,
    /// Date the word was first spoken.
    pub date_achieve: NaiveDate,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Word {
    /// Creates a new word record for a child.
    #[must_use]
    pub fn new(child_id: Uuid, word: impl Into<String>, date_achieve: NaiveDate) -> Self {
        Self {
            id: Uuid::now_v7(),
            child_id,
            word: word.into(),
            date_achieve,
            created_at: Utc::now(),
        }
    }

    /// Returns `true` if the spoken word equals `other` after lowercasing
    /// both sides.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.word.to_lowercase() == other.to_lowercase()
    }

    /// Returns `true` if the word was achieved strictly before `date`.
    #[must_use]
    pub fn achieved_before(&self, date: NaiveDate) -> bool {
        self.date_achieve < date
    }

    /// Returns `true` if the word was achieved strictly after `date`.
    #[must_use]
    pub fn achieved_after(&self, date: NaiveDate) -> bool {
        self.date_achieve > date
    }

    /// Returns `true` if the word was achieved within `[start, end]`,
    /// inclusive on both ends.
    #[must_use]
    pub fn achieved_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date_achieve && self.date_achieve <= end
    }
}
