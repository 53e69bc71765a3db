//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the API request/response types derived from them.

/// Transaction ledger model
pub mod transaction;
/// User identity model
pub mod user;
/// Wallet balance model
pub mod wallet;
