//! Parent account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::principal::Principal;
use crate::role::Role;

/// A registered parent account.
///
/// Parents own children, and all record access is scoped through that
/// ownership. The password is stored only as an Argon2id hash in PHC
/// string format, never in plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parent {
    // === Identity ===
    /// Unique identifier.
    pub id: Uuid,
    /// Login name, unique across all parents.
    pub username: String,
    /// Argon2id password hash.
    pub password_hash: String,
    /// Contact email address.
    pub email: String,

    // === Access ===
    /// Roles granted to this account.
    pub roles: Vec<Role>,

    // === Timestamps ===
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Parent {
    /// Creates a new parent account holding the `Parent` role.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            username: username.into(),
            password_hash: password_hash.into(),
            email: email.into(),
            roles: vec![Role::Parent],
            created_at: now,
            updated_at: now,
        }
    }

    /// Grants an additional role (builder pattern).
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
        self
    }

    /// Returns `true` if this account holds the `Admin` role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }

    /// Returns the caller identity for this account.
    #[must_use]
    pub fn principal(&self) -> Principal {
        Principal::new(self.username.clone(), self.roles.clone())
    }
}
