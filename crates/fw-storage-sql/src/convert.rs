//! Row to domain model conversion.

use fw_model::{Child, Gender, Milestone, Parent, Role, Word};

use crate::entities::{ChildRow, MilestoneRow, ParentRow, WordRow};

impl From<ParentRow> for Parent {
    fn from(row: ParentRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            email: row.email,
            roles: row.roles.0.iter().map(|name| Role::parse(name)).collect(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<ChildRow> for Child {
    fn from(row: ChildRow) -> Self {
        Self {
            id: row.id,
            parent_id: row.parent_id,
            name: row.name,
            birth_date: row.birth_date,
            gender: Gender::parse(&row.gender),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<WordRow> for Word {
    fn from(row: WordRow) -> Self {
        Self {
            id: row.id,
            child_id: row.child_id,
            word: row.word,
            date_achieve: row.date_achieve,
            created_at: row.created_at,
        }
    }
}

impl From<MilestoneRow> for Milestone {
    fn from(row: MilestoneRow) -> Self {
        Self {
            id: row.id,
            child_id: row.child_id,
            title: row.title,
            description: row.description,
            date_achieve: row.date_achieve,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use sqlx::types::Json;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn parent_row_converts_roles() {
        let now = Utc::now();
        let row = ParentRow {
            id: Uuid::now_v7(),
            username: "anna".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            email: "anna@example.com".to_string(),
            roles: Json(vec!["PARENT".to_string(), "ADMIN".to_string()]),
            created_at: now,
            updated_at: now,
        };

        let parent = Parent::from(row);
        assert_eq!(parent.roles, vec![Role::Parent, Role::Admin]);
        assert!(parent.is_admin());
    }

    #[test]
    fn unknown_role_names_never_grant_admin() {
        let now = Utc::now();
        let row = ParentRow {
            id: Uuid::now_v7(),
            username: "anna".to_string(),
            password_hash: "hash".to_string(),
            email: "anna@example.com".to_string(),
            roles: Json(vec!["SUPERUSER".to_string()]),
            created_at: now,
            updated_at: now,
        };

        let parent = Parent::from(row);
        assert_eq!(parent.roles, vec![Role::Parent]);
        assert!(!parent.is_admin());
    }

    #[test]
    fn child_row_parses_gender() {
        let now = Utc::now();
        let row = ChildRow {
            id: Uuid::now_v7(),
            parent_id: Uuid::now_v7(),
            name: "Mia".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2021, 3, 14).unwrap(),
            gender: "female".to_string(),
            created_at: now,
            updated_at: now,
        };

        let child = Child::from(row);
        assert_eq!(child.gender, Gender::Female);
        assert_eq!(child.name, "Mia");
    }

    #[test]
    fn record_rows_keep_their_dates() {
        let now = Utc::now();
        let achieved = NaiveDate::from_ymd_opt(2022, 5, 1).unwrap();
        let child_id = Uuid::now_v7();

        let word = Word::from(WordRow {
            id: Uuid::now_v7(),
            child_id,
            word: "mama".to_string(),
            date_achieve: achieved,
            created_at: now,
        });
        assert_eq!(word.date_achieve, achieved);

        let milestone = Milestone::from(MilestoneRow {
            id: Uuid::now_v7(),
            child_id,
            title: "First steps".to_string(),
            description: "walked".to_string(),
            date_achieve: achieved,
            created_at: now,
            updated_at: now,
        });
        assert_eq!(milestone.child_id, child_id);
        assert_eq!(milestone.date_achieve, achieved);
    }
}
