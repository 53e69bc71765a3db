//! Wallet service - Core business logic for balance adjustments.
//!
//! This service handles:
//! - Lazy wallet creation on first adjustment
//! - Atomic balance updates
//! - Appending to the transaction log
//!
//! # Atomicity Guarantees
//!
//! The wallet upsert and the transaction insert happen within one PostgreSQL
//! transaction. A logged adjustment without a balance change (or the reverse)
//! is never observable.

use crate::{db::DbPool, error::AppError};

/// Apply a signed delta to a user's wallet.
///
/// # Process
///
/// 1. Start a database transaction
/// 2. Verify the user exists (404 otherwise)
/// 3. Lock the wallet row and add the delta; if no wallet row exists yet,
///    create one with balance = amount (a missing wallet is an implicit
///    zero balance)
/// 4. Append a transaction row recording the raw amount with a
///    server-assigned timestamp
/// 5. Commit (or roll back on error)
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `user_id` - User whose wallet to adjust
/// * `amount` - Signed delta; negative debits and zero are both legal, and
///   overdraft below zero is permitted by design
///
/// # Returns
///
/// The post-adjustment balance.
///
/// # Errors
///
/// - `UserNotFound`: user_id does not exist
/// - `Database`: storage failure (nothing is applied)
pub async fn apply_delta(pool: &DbPool, user_id: i64, amount: f64) -> Result<f64, AppError> {
    // Start db transaction
    let mut tx = pool.begin().await?;

    let user_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

    if !user_exists {
        tx.rollback().await?;
        return Err(AppError::UserNotFound);
    }

    // Upsert the wallet and read back the new balance in one statement.
    // The UNIQUE constraint on user_id makes ON CONFLICT target the
    // existing row, which Postgres locks for the rest of the transaction.
    let updated_balance: f64 = sqlx::query_scalar(
        r#"
        INSERT INTO wallets (user_id, balance)
        VALUES ($1, $2)
        ON CONFLICT (user_id)
        DO UPDATE SET balance = wallets.balance + EXCLUDED.balance
        RETURNING balance
        "#,
    )
    .bind(user_id)
    .bind(amount)
    .fetch_one(&mut *tx)
    .await?;

    // Record the raw delta, not the resulting balance
    sqlx::query("INSERT INTO transactions (user_id, amount) VALUES ($1, $2)")
        .bind(user_id)
        .bind(amount)
        .execute(&mut *tx)
        .await?;

    // Commit both writes atomically
    tx.commit().await?;

    Ok(updated_balance)
}
