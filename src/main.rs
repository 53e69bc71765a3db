//! Wallet Ledger Service - Main Application Entry Point
//!
//! This is a REST API server for a minimal wallet ledger: it registers users,
//! tracks a single running balance per user, and records every balance
//! adjustment as an immutable transaction row.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations (create-if-absent schema bootstrap)
//! 4. Build HTTP router
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod services;

use tracing_subscriber::EnvFilter;

use axum::{
    Router,
    routing::{get, post},
};
use db::DbPool;
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// # Routes
///
/// - `GET /` - Liveness message
/// - `GET /users` - List users with wallet balances
/// - `GET /transactions/{user_id}` - List a user's adjustments, newest first
/// - `POST /users` - Register a user
/// - `POST /wallet/{user_id}` - Apply a wallet delta
///
/// The pool is shared with all handlers via State extraction; no other
/// in-process state exists across requests.
fn app(pool: DbPool) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/users", get(handlers::users::list_users))
        .route("/users", post(handlers::users::create_user))
        .route(
            "/transactions/{user_id}",
            get(handlers::transactions::fetch_transactions),
        )
        .route("/wallet/{user_id}", post(handlers::wallet::adjust_wallet))
        // Request tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let app = app(pool);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Pool that never connects; fine for routes that skip the database.
    fn lazy_pool() -> DbPool {
        sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/wallet_test")
            .unwrap()
    }

    #[tokio::test]
    async fn root_returns_running_message() {
        let app = app(lazy_pool());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Wallet API is running.");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = app(lazy_pool());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wallet_route_rejects_get() {
        let app = app(lazy_pool());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/wallet/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn create_user_rejects_malformed_body() {
        let app = app(lazy_pool());

        // Missing required fields never reaches the handler
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name": "Ann"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
