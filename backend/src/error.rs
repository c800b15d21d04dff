//! Error handling for the Warehouse Management System
//!
//! Provides the error taxonomy of the order-fulfillment contract: caller
//! mistakes (validation, missing references), retryable contention, and
//! store failures, each with a consistent JSON response shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// SQLSTATE for a unique constraint violation
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE raised when `lock_timeout` expires while waiting for a row lock
const LOCK_NOT_AVAILABLE: &str = "55P03";
/// SQLSTATE raised when Postgres aborts one side of a lock cycle; happens
/// when two orders touch the same inventory pairs in opposite item order
const DEADLOCK_DETECTED: &str = "40P01";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Transient contention: the caller may retry the whole submission
    #[error("Timed out waiting for an inventory row lock")]
    LockTimeout,

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    /// Reinterpret a database error raised inside the fulfillment
    /// transaction: unique violations are caller-visible conflicts, while
    /// lock timeouts and deadlock aborts are retryable contention;
    /// everything else stays a persistence failure.
    pub fn from_sqlx(err: sqlx::Error, conflict_entity: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if let Some(code) = db_err.code().as_deref() {
                if let Some(mapped) = Self::classify_sqlstate(code, conflict_entity) {
                    return mapped;
                }
            }
        }
        AppError::DatabaseError(err)
    }

    /// Map the SQLSTATEs the fulfillment transaction can provoke under
    /// contention onto the error taxonomy
    fn classify_sqlstate(code: &str, conflict_entity: &str) -> Option<Self> {
        match code {
            UNIQUE_VIOLATION => Some(AppError::DuplicateEntry(conflict_entity.to_string())),
            LOCK_NOT_AVAILABLE | DEADLOCK_DETECTED => Some(AppError::LockTimeout),
            _ => None,
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "INVALID_CREDENTIALS".to_string(),
                    message: "Invalid username or password".to_string(),
                    field: None,
                },
            ),
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::DuplicateEntry(field) => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    code: "DUPLICATE_ENTRY".to_string(),
                    message: format!("A record with this {} already exists", field),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    field: None,
                },
            ),
            AppError::LockTimeout => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "LOCK_TIMEOUT".to_string(),
                    message: "Inventory is busy, please retry the submission".to_string(),
                    field: None,
                },
            ),
            AppError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "DATABASE_ERROR".to_string(),
                    message: "A database error occurred".to_string(),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_is_a_database_error() {
        let err = AppError::from_sqlx(sqlx::Error::RowNotFound, "order");
        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[test]
    fn test_lock_timeout_maps_to_service_unavailable() {
        let response = AppError::LockTimeout.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_lock_wait_sqlstates_are_retryable() {
        // Both a lock_timeout expiry and a deadlock abort are transient
        // contention: the caller resubmits the whole order
        assert!(matches!(
            AppError::classify_sqlstate("55P03", "inventory"),
            Some(AppError::LockTimeout)
        ));
        assert!(matches!(
            AppError::classify_sqlstate("40P01", "inventory"),
            Some(AppError::LockTimeout)
        ));
    }

    #[test]
    fn test_unique_violation_names_the_conflicting_entity() {
        match AppError::classify_sqlstate("23505", "order_number") {
            Some(AppError::DuplicateEntry(entity)) => assert_eq!(entity, "order_number"),
            other => panic!("expected DuplicateEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_unrelated_sqlstates_stay_database_errors() {
        // 23503 is a foreign key violation; no special handling
        assert!(AppError::classify_sqlstate("23503", "inventory").is_none());
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::ValidationError("Quantity must be positive".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
