//! Business logic services.

/// User registration with duplicate-contact checking
pub mod user_service;
/// Atomic wallet adjustments
pub mod wallet_service;
