//! User service - Registration with duplicate-contact checking.

use crate::{db::DbPool, error::AppError, models::user::User};

/// Register a new user.
///
/// # Process
///
/// 1. Start a database transaction
/// 2. Check for an existing user with the same email OR phone; fail with
///    `DuplicateContact` if one exists (no partial creation)
/// 3. Insert the new user (no wallet row is created; the wallet appears
///    lazily on the first adjustment)
/// 4. Commit
///
/// The check-then-insert pair leaves a race window between concurrent
/// registrations. The unique indexes on email and phone close it: if a
/// concurrent insert wins, this insert fails with a unique violation, which
/// is mapped to the same `DuplicateContact` error the check produces.
///
/// # Errors
///
/// - `DuplicateContact`: email or phone already registered
/// - `Database`: storage failure
pub async fn register_user(
    pool: &DbPool,
    name: String,
    email: String,
    phone: String,
) -> Result<User, AppError> {
    let mut tx = pool.begin().await?;

    let contact_taken: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 OR phone = $2)")
            .bind(&email)
            .bind(&phone)
            .fetch_one(&mut *tx)
            .await?;

    if contact_taken {
        tx.rollback().await?;
        return Err(AppError::DuplicateContact);
    }

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, phone)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, phone
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(phone)
    .fetch_one(&mut *tx)
    .await
    .map_err(AppError::conflict_on_unique_violation)?;

    tx.commit().await?;

    Ok(user)
}
