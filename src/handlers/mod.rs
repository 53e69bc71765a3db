//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Performs business logic (database queries, validation)
//! 3. Returns HTTP response (JSON, status code)

/// Root liveness endpoint
pub mod health;
/// Transaction listing endpoint
pub mod transactions;
/// User listing and registration endpoints
pub mod users;
/// Wallet adjustment endpoint
pub mod wallet;
