//! Transaction data models and API response types.
//!
//! A transaction is an immutable log entry of one balance adjustment: the
//! raw signed amount that was applied, not the resulting balance. Rows are
//! only ever inserted, never updated or deleted.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. Each transaction:
/// - References the affected user via `user_id`
/// - Stores the signed delta (positive credit, negative debit, zero allowed)
/// - Carries a server-assigned creation timestamp
///
/// Summing a user's amounts in order reconciles to the wallet's balance
/// trajectory; that property is derivable, not stored or enforced.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the database
    pub id: i64,

    /// User whose wallet this adjustment applied to
    pub user_id: i64,

    /// Signed delta recorded as sent by the caller
    pub amount: f64,

    /// Creation instant, assigned by the database at insert time
    pub timestamp: DateTime<Utc>,
}

/// Response body for the transaction listing endpoint.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 12,
///   "user_id": 3,
///   "amount": -20.0,
///   "timestamp": "2025-12-21T16:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id,
            user_id: transaction.user_id,
            amount: transaction.amount,
            timestamp: transaction.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn response_serializes_contract_fields() {
        let response = TransactionResponse {
            id: 12,
            user_id: 3,
            amount: -20.0,
            timestamp: Utc.with_ymd_and_hms(2025, 12, 21, 16, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 12);
        assert_eq!(json["user_id"], 3);
        assert_eq!(json["amount"], -20.0);
        assert_eq!(json["timestamp"], "2025-12-21T16:00:00Z");
    }
}
