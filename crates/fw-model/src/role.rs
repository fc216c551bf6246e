//! Roles for role-based access control.

use serde::{Deserialize, Serialize};

/// Role granted to a parent account.
///
/// Every registered account holds `Parent`. Administrators additionally
/// hold `Admin`, which lets them act on another parent's children when
/// they name that parent explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Regular parent account.
    #[default]
    Parent,
    /// Administrator account.
    Admin,
}

impl Role {
    /// Returns the string representation used in storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Parent => "PARENT",
            Self::Admin => "ADMIN",
        }
    }

    /// Parses a stored role name.
    ///
    /// Unknown names fall back to `Parent` so a corrupted role list can
    /// never grant more access than a regular account.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "ADMIN" => Self::Admin,
            _ => Self::Parent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_round_trips_through_parse() {
        assert_eq!(Role::parse(Role::Parent.as_str()), Role::Parent);
        assert_eq!(Role::parse(Role::Admin.as_str()), Role::Admin);
    }

    #[test]
    fn unknown_role_falls_back_to_parent() {
        assert_eq!(Role::parse("SUPERUSER"), Role::Parent);
        assert_eq!(Role::parse(""), Role::Parent);
    }

    #[test]
    fn serializes_as_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    }
}
