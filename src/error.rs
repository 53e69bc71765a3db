//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from storage operations
/// - **Resource Errors**: Referenced user does not exist
/// - **Conflict Errors**: Duplicate email or phone on user creation
/// - **Validation Errors**: Invalid request data that slipped past the
///   boundary schema layer (e.g. an empty name)
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// Wraps any sqlx::Error via `#[from]`. Propagates as HTTP 500; no
    /// automatic retry is attempted.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Referenced user_id does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("User not found")]
    UserNotFound,

    /// Email or phone already belongs to another user.
    ///
    /// Returns HTTP 400 Bad Request, matching the original contract.
    #[error("Email or phone already registered")]
    DuplicateContact,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

impl AppError {
    /// Map a storage error to `DuplicateContact` when it is a unique-constraint
    /// violation, otherwise pass it through as a database error.
    ///
    /// The create-user handler checks for duplicates before inserting, but
    /// two concurrent creates can both pass that check. The unique indexes on
    /// `users.email` and `users.phone` catch the loser of that race, and this
    /// mapping keeps the caller-visible error identical in both paths.
    pub fn conflict_on_unique_violation(err: sqlx::Error) -> AppError {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return AppError::DuplicateContact;
            }
        }
        AppError::Database(err)
    }
}

/// Convert AppError into an HTTP response.
///
/// Lets handlers return `Result<T, AppError>` and have errors automatically
/// converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `UserNotFound` → 404 Not Found
/// - `DuplicateContact` → 400 Bad Request
/// - `InvalidRequest` → 422 Unprocessable Entity
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "user_not_found", self.to_string()),
            AppError::DuplicateContact => (
                StatusCode::BAD_REQUEST,
                "duplicate_contact",
                self.to_string(),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_request", msg.clone())
            }
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_not_found_maps_to_404() {
        let res = AppError::UserNotFound.into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_contact_maps_to_400() {
        let res = AppError::DuplicateContact.into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_request_maps_to_422() {
        let res = AppError::InvalidRequest("name must not be empty".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn database_error_maps_to_500() {
        let res = AppError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_unique_violation_stays_a_database_error() {
        let mapped = AppError::conflict_on_unique_violation(sqlx::Error::RowNotFound);
        assert!(matches!(mapped, AppError::Database(_)));
    }
}
