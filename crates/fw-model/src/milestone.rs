//! Milestone record domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A developmental milestone reached by a child.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    /// Unique identifier.
    pub id: Uuid,
    /// Child this milestone belongs to.
    pub child_id: Uuid,
    /// Short title, e.g. "First steps".
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Date the milestone was reached.
    pub date_achieve: NaiveDate,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Milestone {
    /// Creates a new milestone for a child.
    #[must_use]
    pub fn new(
        child_id: Uuid,
        title: impl Into<String>,
        description: impl Into<String>,
        date_achieve: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            child_id,
            title: title.into(),
            description: description.into(),
            date_achieve,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns `true` if the title equals `other` after lowercasing both
    /// sides.
    #[must_use]
    pub fn title_matches(&self, other: &str) -> bool {
        self.title.to_lowercase() == other.to_lowercase()
    }

    /// Returns `true` if the lowercased title contains the lowercased
    /// `fragment`.
    #[must_use]
    pub fn title_contains(&self, fragment: &str) -> bool {
        self.title.to_lowercase().contains(&fragment.to_lowercase())
    }

    /// Returns `true` if the milestone was reached strictly before `date`.
    #[must_use]
    pub fn achieved_before(&self, date: NaiveDate) -> bool {
        self.date_achieve < date
    }

    /// Returns `true` if the milestone was reached strictly after `date`.
    #[must_use]
    pub fn achieved_after(&self, date: NaiveDate) -> bool {
        self.date_achieve > date
    }

    /// Returns `true` if the milestone was reached within `[start, end]`,
    /// inclusive on both ends.
    #[must_use]
    pub fn achieved_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date_achieve && self.date_achieve <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn title_match_ignores_case() {
        let milestone = Milestone::new(Uuid::now_v7(), "First Steps", "walked!", date(2022, 8, 2));

        assert!(milestone.title_matches("first steps"));
        assert!(milestone.title_matches("FIRST STEPS"));
        assert!(!milestone.title_matches("first"));
    }

    #[test]
    fn title_contains_is_substring_search() {
        let milestone = Milestone::new(Uuid::now_v7(), "First Steps", "walked!", date(2022, 8, 2));

        assert!(milestone.title_contains("steps"));
        assert!(milestone.title_contains("IRST"));
        assert!(!milestone.title_contains("crawl"));
    }

    #[test]
    fn new_milestone_keeps_fields() {
        let child_id = Uuid::now_v7();
        let milestone = Milestone::new(child_id, "First tooth", "lower left", date(2022, 1, 9));

        assert_eq!(milestone.child_id, child_id);
        assert_eq!(milestone.title, "First tooth");
        assert_eq!(milestone.description, "lower left");
        assert_eq!(milestone.created_at, milestone.updated_at);
    }
}
