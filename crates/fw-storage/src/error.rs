//! Storage error types.

use thiserror::Error;

/// Errors produced by storage providers.
///
/// Providers report what happened in storage terms; deciding which HTTP
/// status a failure maps to is the transport layer's job.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The requested entity does not exist.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        /// Entity type name, e.g. "Parent".
        entity_type: &'static str,
        /// Identifier that was looked up.
        id: String,
    },

    /// A unique field already holds the given value.
    #[error("{entity_type} already exists: {field} = {value}")]
    Duplicate {
        /// Entity type name, e.g. "Parent".
        entity_type: &'static str,
        /// Field that collided.
        field: &'static str,
        /// Value that collided.
        value: String,
    },

    /// The backend could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A query failed to execute.
    #[error("Query error: {0}")]
    Query(String),

    /// Stored data could not be decoded into a domain model.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Any other storage failure.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

impl StorageError {
    /// Creates a `NotFound` error.
    pub fn not_found(entity_type: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Creates a `Duplicate` error.
    pub fn duplicate(
        entity_type: &'static str,
        field: &'static str,
        value: impl std::fmt::Display,
    ) -> Self {
        Self::Duplicate {
            entity_type,
            field,
            value: value.to_string(),
        }
    }

    /// Returns `true` if this is a `NotFound` error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is a `Duplicate` error.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Convenience alias for storage operation results.
pub type StorageResult<T> = Result<T, StorageError>;
