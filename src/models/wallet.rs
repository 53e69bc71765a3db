//! Wallet data models and the adjustment request/response types.
//!
//! A wallet is the running balance for one user. The row is created lazily:
//! until the first adjustment a user has no wallet row and is treated as
//! holding a zero balance.

use serde::{Deserialize, Serialize};

/// Represents a wallet record from the database.
///
/// # Database Table
///
/// Maps to the `wallets` table. `user_id` is UNIQUE, so each user owns at
/// most one wallet. Once set, `user_id` never changes; the balance is only
/// ever moved by applying a signed delta.
///
/// # Balance Storage
///
/// The balance is a signed double. Negative balances are legal: a debit
/// larger than the current balance is an overdraft by design, not an error.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Wallet {
    /// Unique identifier, assigned by the database
    pub id: i64,

    /// Owning user (UNIQUE foreign key to `users.id`)
    pub user_id: i64,

    /// Current running balance
    pub balance: f64,
}

/// Request body for applying a wallet delta.
///
/// # JSON Example
///
/// ```json
/// {
///   "amount": -20.0
/// }
/// ```
///
/// The amount is a signed value: positive credits, negative debits. No sign
/// or magnitude validation is performed; zero is a legal adjustment and is
/// still recorded in the transaction log.
#[derive(Debug, Deserialize)]
pub struct WalletAdjustRequest {
    pub amount: f64,
}

/// Response body for the wallet-adjustment endpoint.
///
/// # JSON Example
///
/// ```json
/// {
///   "user_id": 1,
///   "updated_balance": 30.0
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct WalletAdjustResponse {
    pub user_id: i64,

    /// Balance after the delta was applied
    pub updated_balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_request_accepts_negative_amounts() {
        let request: WalletAdjustRequest = serde_json::from_str(r#"{"amount": -20.0}"#).unwrap();
        assert_eq!(request.amount, -20.0);
    }

    #[test]
    fn adjust_request_rejects_missing_amount() {
        assert!(serde_json::from_str::<WalletAdjustRequest>("{}").is_err());
    }

    #[test]
    fn adjust_response_serializes_contract_fields() {
        let response = WalletAdjustResponse {
            user_id: 3,
            updated_balance: 30.0,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"user_id": 3, "updated_balance": 30.0})
        );
    }
}
