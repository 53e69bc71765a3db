//! Transaction listing HTTP handler.
//!
//! - GET /transactions/:user_id - List a user's adjustments, newest first

use crate::{
    db::DbPool,
    error::AppError,
    models::transaction::{Transaction, TransactionResponse},
};
use axum::{
    Json,
    extract::{Path, State},
};

/// Fetch all transactions for a user.
///
/// # Endpoint
///
/// `GET /transactions/:user_id`
///
/// # Response
///
/// - **Success (200 OK)**: array of transactions, possibly empty
/// - **Error (404)**: user_id unknown
///
/// ```json
/// [
///   { "id": 13, "user_id": 3, "amount": -20.0, "timestamp": "2025-12-21T16:05:00Z" },
///   { "id": 12, "user_id": 3, "amount": 50.0, "timestamp": "2025-12-21T16:00:00Z" }
/// ]
/// ```
///
/// # Ordering
///
/// Newest first, by timestamp descending. This ordering is part of the API
/// contract. The id tie-break keeps same-instant inserts stable.
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Path(user_id)` - User id from the URL path
pub async fn fetch_transactions(
    State(pool): State<DbPool>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let user_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
        .bind(user_id)
        .fetch_one(&pool)
        .await?;

    if !user_exists {
        return Err(AppError::UserNotFound);
    }

    let transactions = sqlx::query_as::<_, Transaction>(
        r#"
        SELECT id, user_id, amount, timestamp
        FROM transactions
        WHERE user_id = $1
        ORDER BY timestamp DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(&pool)
    .await?;

    let responses: Vec<TransactionResponse> = transactions.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}
