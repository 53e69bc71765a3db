//! Root liveness endpoint.

use axum::Json;
use serde_json::{Value, json};

/// Root handler.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "message": "Wallet API is running."
/// }
/// ```
///
/// Purely a liveness message; does not touch the database.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Wallet API is running." }))
}
