//! User management HTTP handlers.
//!
//! This module implements the user-related API endpoints:
//! - GET /users - List all users with wallet balances
//! - POST /users - Register a new user

use crate::{
    db::DbPool,
    error::AppError,
    models::user::{CreateUserRequest, UserResponse},
    services::user_service,
};
use axum::{Json, extract::State, http::StatusCode};

/// List all users together with their current wallet balances.
///
/// # Endpoint
///
/// `GET /users`
///
/// # Response (200 OK)
///
/// ```json
/// [
///   {
///     "id": 1,
///     "name": "Ann",
///     "email": "ann@x.com",
///     "phone": "555",
///     "wallet_balance": 30.0
///   }
/// ]
/// ```
///
/// No pagination or filtering. Users without a wallet row report a balance
/// of 0.0 (the LEFT JOIN plus COALESCE keeps them in the listing).
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool (injected by Axum)
pub async fn list_users(State(pool): State<DbPool>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = sqlx::query_as::<_, UserResponse>(
        r#"
        SELECT u.id, u.name, u.email, u.phone,
               COALESCE(w.balance, 0.0) AS wallet_balance
        FROM users u
        LEFT JOIN wallets w ON w.user_id = u.id
        ORDER BY u.id
        "#,
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(users))
}

/// Register a new user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ann",
///   "email": "ann@x.com",
///   "phone": "555"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the new user with `wallet_balance: 0.0`
///   (no wallet row exists yet; the balance is the implicit zero)
/// - **Error (400)**: email or phone already registered
/// - **Error (422)**: empty name
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Deserialized JSON request body
pub async fn create_user(
    State(pool): State<DbPool>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "name must not be empty".to_string(),
        ));
    }

    let user =
        user_service::register_user(&pool, request.name, request.email, request.phone).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
