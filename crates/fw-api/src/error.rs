//! Error types for API handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fw_auth::AccessError;
use fw_storage::StorageError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Access resolution failed or a scoped record was not found.
    #[error("{0}")]
    Access(#[from] AccessError),

    /// An entity addressed directly by id does not exist.
    #[error("{entity_type} not found")]
    NotFound {
        /// Entity type, e.g. "Parent".
        entity_type: &'static str,
    },

    /// A unique field already holds the requested value.
    #[error("{entity_type} with {field} '{value}' already exists")]
    Conflict {
        /// Entity type, e.g. "Parent".
        entity_type: &'static str,
        /// Conflicting field name.
        field: &'static str,
        /// Conflicting value.
        value: String,
    },

    /// The request body or query failed validation.
    #[error("{0}")]
    Validation(String),

    /// The caller is authenticated but not allowed to do this.
    #[error("{0}")]
    Forbidden(String),

    /// Storage failed outside of access resolution.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Creates a not-found error for an entity addressed by id.
    #[must_use]
    pub const fn not_found(entity_type: &'static str) -> Self {
        Self::NotFound { entity_type }
    }

    /// Creates a conflict error for a unique field collision.
    pub fn conflict(entity_type: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        Self::Conflict {
            entity_type,
            field,
            value: value.into(),
        }
    }

    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The HTTP status code this error maps to.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Access(err) => match err {
                AccessError::ParentNotFound
                | AccessError::ChildNotFound
                | AccessError::RecordNotFound(_) => StatusCode::NOT_FOUND,
                AccessError::AccessDenied => StatusCode::FORBIDDEN,
                AccessError::AdminMissingParentId
                | AccessError::DateValidation
                | AccessError::InvalidDateOrder => StatusCode::BAD_REQUEST,
                AccessError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Storage(err) => {
                if err.is_duplicate() {
                    StatusCode::CONFLICT
                } else if err.is_not_found() {
                    StatusCode::NOT_FOUND
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// A stable machine-readable code for the error body.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Access(err) => match err {
                AccessError::ParentNotFound
                | AccessError::ChildNotFound
                | AccessError::RecordNotFound(_) => "not_found",
                AccessError::AccessDenied => "forbidden",
                AccessError::AdminMissingParentId
                | AccessError::DateValidation
                | AccessError::InvalidDateOrder => "bad_request",
                AccessError::Storage(_) => "storage_error",
            },
            Self::NotFound { .. } => "not_found",
            Self::Conflict { .. } => "conflict",
            Self::Validation(_) => "validation_error",
            Self::Forbidden(_) => "forbidden",
            Self::Storage(_) => "storage_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

/// JSON body returned for every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable description.
    pub error_description: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: self.error_code().to_string(),
            error_description: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_errors_map_to_contract_status_codes() {
        let cases = [
            (AccessError::ParentNotFound, StatusCode::NOT_FOUND),
            (AccessError::ChildNotFound, StatusCode::NOT_FOUND),
            (AccessError::word_not_found(), StatusCode::NOT_FOUND),
            (AccessError::milestone_not_found(), StatusCode::NOT_FOUND),
            (AccessError::AccessDenied, StatusCode::FORBIDDEN),
            (AccessError::AdminMissingParentId, StatusCode::BAD_REQUEST),
            (AccessError::DateValidation, StatusCode::BAD_REQUEST),
            (AccessError::InvalidDateOrder, StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status_code(), status);
        }
    }

    #[test]
    fn access_error_messages_pass_through_unchanged() {
        let err = ApiError::from(AccessError::AccessDenied);
        assert_eq!(err.to_string(), "The parent does not have access to this child");
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = ApiError::conflict("Parent", "username", "anna");
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "Parent with username 'anna' already exists");
    }

    #[test]
    fn duplicate_storage_errors_surface_as_conflict() {
        let err = ApiError::from(StorageError::duplicate("Parent", "username", "anna"));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn error_body_serializes_code_and_description() {
        let body = ErrorResponse {
            error: "not_found".to_string(),
            error_description: "Parent not found".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "not_found");
        assert_eq!(json["error_description"], "Parent not found");
    }
}
