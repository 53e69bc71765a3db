//! User data models and API request/response types.
//!
//! This module defines:
//! - `User`: Database entity representing a registered user
//! - `CreateUserRequest`: Request body for registering users
//! - `UserResponse`: Response body returned to clients, including the
//!   current wallet balance

use serde::{Deserialize, Serialize};

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table. Each user:
/// - Owns at most one wallet (enforced by a UNIQUE constraint on
///   `wallets.user_id`)
/// - Has globally unique email and phone values
///
/// Users are never updated or deleted once created.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct User {
    /// Unique identifier, assigned by the database
    pub id: i64,

    /// Display name (non-empty)
    pub name: String,

    /// Email address, unique across all users
    pub email: String,

    /// Phone number, unique across all users
    pub phone: String,
}

/// Request body for registering a new user.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Ann",
///   "email": "ann@x.com",
///   "phone": "555"
/// }
/// ```
///
/// All three fields are required; missing fields are rejected by the JSON
/// extractor before the handler runs. An empty `name` is rejected in the
/// handler with 422.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Response body for user endpoints.
///
/// Combines the user row with its current wallet balance. A user without a
/// wallet row reports `wallet_balance: 0.0` (the wallet is only created on
/// the first adjustment).
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "name": "Ann",
///   "email": "ann@x.com",
///   "phone": "555",
///   "wallet_balance": 30.0
/// }
/// ```
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub wallet_balance: f64,
}

/// Convert a freshly inserted User into a UserResponse.
///
/// Only valid at creation time: a new user has no wallet row yet, so the
/// balance is reported as the implicit zero.
impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            wallet_balance: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_response_reports_zero_balance() {
        let user = User {
            id: 7,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            phone: "555".to_string(),
        };
        let response = UserResponse::from(user);
        assert_eq!(response.wallet_balance, 0.0);
        assert_eq!(response.id, 7);
    }

    #[test]
    fn user_response_serializes_all_contract_fields() {
        let response = UserResponse {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            phone: "555".to_string(),
            wallet_balance: 0.0,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Ann",
                "email": "ann@x.com",
                "phone": "555",
                "wallet_balance": 0.0
            })
        );
    }

    #[test]
    fn create_request_requires_all_fields() {
        let missing_phone = r#"{"name": "Ann", "email": "ann@x.com"}"#;
        assert!(serde_json::from_str::<CreateUserRequest>(missing_phone).is_err());

        let complete = r#"{"name": "Ann", "email": "ann@x.com", "phone": "555"}"#;
        let request: CreateUserRequest = serde_json::from_str(complete).unwrap();
        assert_eq!(request.name, "Ann");
    }
}
