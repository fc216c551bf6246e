//! Authenticated caller identity.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The authenticated caller of an operation.
///
/// A principal is established by the HTTP authentication layer and passed
/// explicitly into access resolution. It carries only what authorization
/// needs and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Account username, unique across all parents.
    pub username: String,
    /// Roles granted to the account.
    pub roles: Vec<Role>,
}

impl Principal {
    /// Creates a principal for the given username and roles.
    #[must_use]
    pub fn new(username: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            username: username.into(),
            roles,
        }
    }

    /// Returns `true` if the caller holds the `Admin` role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_check_requires_admin_role() {
        let parent = Principal::new("anna", vec![Role::Parent]);
        assert!(!parent.is_admin());

        let admin = Principal::new("root", vec![Role::Parent, Role::Admin]);
        assert!(admin.is_admin());
    }
}
