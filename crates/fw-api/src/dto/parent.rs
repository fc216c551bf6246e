//! Parent account API types.

use chrono::{DateTime, Utc};
use fw_model::{Parent, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for registering a parent account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterParentRequest {
    /// Desired username.
    pub username: String,
    /// Plaintext password, checked against the account policy.
    pub password: String,
    /// Contact email address.
    pub mail: String,
}

/// Request body for changing an account password.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// New plaintext password.
    pub password: String,
}

/// Parent account representation returned by the API.
///
/// The password hash never leaves the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRepresentation {
    /// Unique identifier.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Email address.
    pub mail: String,
    /// Granted roles.
    pub roles: Vec<Role>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Parent> for ParentRepresentation {
    fn from(parent: Parent) -> Self {
        Self {
            id: parent.id,
            username: parent.username,
            mail: parent.email,
            roles: parent.roles,
            created_at: parent.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_uses_camel_case() {
        let json = r#"{"username": "anna", "password": "hunter2", "mail": "anna@example.com"}"#;
        let request: RegisterParentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username, "anna");
        assert_eq!(request.mail, "anna@example.com");
    }

    #[test]
    fn representation_never_carries_the_hash() {
        let parent = Parent::new("anna", "$argon2id$secret", "anna@example.com");
        let json = serde_json::to_value(ParentRepresentation::from(parent)).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["roles"], serde_json::json!(["PARENT"]));
    }
}
