//! Shared access control error taxonomy.
//!
//! Every failure mode of access resolution and record query validation is
//! a variant here. The messages are part of the API contract and must not
//! drift; the HTTP layer decides which status code each variant maps to.

use fw_storage::StorageError;
use thiserror::Error;

/// Errors raised while resolving access to a child or validating record
/// queries.
#[derive(Debug, Error)]
pub enum AccessError {
    /// No parent account matches the caller or the explicitly named id.
    #[error("Parent not found")]
    ParentNotFound,

    /// The child does not exist.
    #[error("Child not found")]
    ChildNotFound,

    /// The child exists but belongs to another parent.
    #[error("The parent does not have access to this child")]
    AccessDenied,

    /// An administrator called a child operation without naming a parent.
    #[error("parentID is required for administrators")]
    AdminMissingParentId,

    /// A required date bound is missing from a range query.
    #[error("Start date and end date are required")]
    DateValidation,

    /// The start of a date range lies after its end.
    #[error("Start date must be before or equal to end date")]
    InvalidDateOrder,

    /// A record does not exist under the resolved child.
    #[error("{0} not found")]
    RecordNotFound(&'static str),

    /// Storage failed while resolving access.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AccessError {
    /// Creates a `RecordNotFound` error for a word record.
    #[must_use]
    pub const fn word_not_found() -> Self {
        Self::RecordNotFound("Word")
    }

    /// Creates a `RecordNotFound` error for a milestone record.
    #[must_use]
    pub const fn milestone_not_found() -> Self {
        Self::RecordNotFound("Milestone")
    }
}

/// Convenience alias for access resolution results.
pub type AccessResult<T> = Result<T, AccessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(AccessError::ParentNotFound.to_string(), "Parent not found");
        assert_eq!(AccessError::ChildNotFound.to_string(), "Child not found");
        assert_eq!(
            AccessError::AccessDenied.to_string(),
            "The parent does not have access to this child"
        );
        assert_eq!(
            AccessError::AdminMissingParentId.to_string(),
            "parentID is required for administrators"
        );
        assert_eq!(
            AccessError::InvalidDateOrder.to_string(),
            "Start date must be before or equal to end date"
        );
        assert_eq!(AccessError::word_not_found().to_string(), "Word not found");
        assert_eq!(
            AccessError::milestone_not_found().to_string(),
            "Milestone not found"
        );
    }
}
