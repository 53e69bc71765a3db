//! Database connection pool and migration management.
//!
//! The pool is shared across all handlers via Axum state; each request borrows
//! a connection for the duration of its queries and returns it to the pool
//! unconditionally, including on error paths.

use sqlx::{Pool, Postgres};

/// Type alias for the PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// Connections are created lazily as needed and reused across requests,
/// capped at 5 concurrent connections.
///
/// # Errors
///
/// Returns an error if the connection string is invalid, the server is
/// unreachable, or authentication fails.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// This is the schema create-if-absent step: it executes each migration file
/// exactly once (tracked in `_sqlx_migrations`), so running it on every
/// startup is idempotent. The users, wallets, and transactions tables are
/// created here, including the unique constraints on email and phone.
///
/// # Errors
///
/// Returns an error on SQL failures or if the migration state recorded in
/// the database conflicts with the files compiled into the binary.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro embeds the migrations at compile time
    sqlx::migrate!("./migrations").run(pool).await
}
