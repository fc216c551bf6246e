//! Child domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender recorded for a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Not stated or other.
    Other,
}

impl Gender {
    /// Returns the string representation used in storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Parses a stored gender value, ignoring case.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other,
        }
    }
}

/// A child belonging to a parent account.
///
/// The owning parent is fixed at creation time. Every record (first word
/// or milestone) hangs off a child, so ownership of the child decides who
/// may touch the records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Child {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning parent account. Never changes after creation.
    pub parent_id: Uuid,
    /// Child's name.
    pub name: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Recorded gender.
    pub gender: Gender,
    /// When the child was created.
    pub created_at: DateTime<Utc>,
    /// When the child was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Child {
    /// Creates a new child owned by the given parent.
    #[must_use]
    pub fn new(parent_id: Uuid, name: impl Into<String>, birth_date: NaiveDate, gender: Gender) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            parent_id,
            name: name.into(),
            birth_date,
            gender,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_child_belongs_to_parent() {
        let parent_id = Uuid::now_v7();
        let birth_date = NaiveDate::from_ymd_opt(2021, 3, 14).unwrap();
        let child = Child::new(parent_id, "Mia", birth_date, Gender::Female);

        assert_eq!(child.parent_id, parent_id);
        assert_eq!(child.name, "Mia");
        assert_eq!(child.birth_date, birth_date);
        assert_eq!(child.gender, Gender::Female);
    }

    #[test]
    fn gender_parse_ignores_case() {
        assert_eq!(Gender::parse("Male"), Gender::Male);
        assert_eq!(Gender::parse("FEMALE"), Gender::Female);
        assert_eq!(Gender::parse("unspecified"), Gender::Other);
    }
}
