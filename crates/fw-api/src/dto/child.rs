//! Child API types.

use chrono::NaiveDate;
use fw_model::{Child, Gender};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for adding a child.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChildRequest {
    /// Child's name.
    pub name: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Gender.
    pub gender: Gender,
}

impl CreateChildRequest {
    /// Builds the domain child owned by the given parent.
    #[must_use]
    pub fn into_child(self, parent_id: Uuid) -> Child {
        Child::new(parent_id, self.name, self.birth_date, self.gender)
    }
}

/// Child representation returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildRepresentation {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning parent.
    pub parent_id: Uuid,
    /// Child's name.
    pub name: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Gender.
    pub gender: Gender,
}

impl From<Child> for ChildRepresentation {
    fn from(child: Child) -> Self {
        Self {
            id: child.id,
            parent_id: child.parent_id,
            name: child.name,
            birth_date: child.birth_date,
            gender: child.gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_builds_a_child_for_the_parent() {
        let json = r#"{"name": "Mia", "birthDate": "2021-03-14", "gender": "female"}"#;
        let request: CreateChildRequest = serde_json::from_str(json).unwrap();
        let parent_id = Uuid::now_v7();
        let child = request.into_child(parent_id);
        assert_eq!(child.parent_id, parent_id);
        assert_eq!(child.name, "Mia");
        assert_eq!(child.gender, Gender::Female);
    }
}
