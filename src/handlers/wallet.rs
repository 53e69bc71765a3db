//! Wallet adjustment HTTP handler.
//!
//! - POST /wallet/:user_id - Apply a signed delta to a user's wallet

use crate::{
    db::DbPool,
    error::AppError,
    models::wallet::{WalletAdjustRequest, WalletAdjustResponse},
    services::wallet_service,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// Apply a wallet delta.
///
/// # Endpoint
///
/// `POST /wallet/:user_id`
///
/// # Request Body
///
/// ```json
/// {
///   "amount": 50.0
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the post-adjustment balance
/// - **Error (404)**: user_id unknown
///
/// ```json
/// {
///   "user_id": 3,
///   "updated_balance": 50.0
/// }
/// ```
///
/// No sign or magnitude validation: negative amounts debit the wallet, even
/// below zero, and a zero amount still produces a transaction row.
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Path(user_id)` - User id from the URL path
/// * `Json(request)` - Deserialized JSON request body
pub async fn adjust_wallet(
    State(pool): State<DbPool>,
    Path(user_id): Path<i64>,
    Json(request): Json<WalletAdjustRequest>,
) -> Result<Json<WalletAdjustResponse>, AppError> {
    let updated_balance = wallet_service::apply_delta(&pool, user_id, request.amount).await?;

    Ok(Json(WalletAdjustResponse {
        user_id,
        updated_balance,
    }))
}
