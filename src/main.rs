//! Transaction Service - Main Application Entry Point
//!
//! REST API that records deposits, withdrawals, and transfers against
//! accounts owned by a separate account-ledger service. Balance state
//! lives exclusively in that service; this one orchestrates the remote
//! calls and persists an immutable record of every outcome.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (transaction records only)
//! - **Remote calls**: reqwest client against the account service
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool and run migrations
//! 3. Build the account client and the strategy registry
//! 4. Build the HTTP router and start serving

mod clients;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod services;
mod store;
#[cfg(test)]
mod test_support;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::clients::account::HttpAccountClient;
use crate::db::DbPool;
use crate::services::transaction_service::TransactionService;
use crate::store::PgTransactionStore;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub service: Arc<TransactionService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaults to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let account_client = HttpAccountClient::new(
        config.account_service_url.clone(),
        Duration::from_secs(config.account_service_timeout_secs),
    )?;
    let store = PgTransactionStore::new(pool.clone());

    // Strategy registry is built once here and read-only afterwards
    let service = Arc::new(TransactionService::new(
        Arc::new(account_client),
        Arc::new(store),
    ));

    let state = AppState {
        pool,
        service,
    };

    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/api/v1/transactions/deposit",
            post(handlers::transactions::deposit),
        )
        .route(
            "/api/v1/transactions/withdraw",
            post(handlers::transactions::withdraw),
        )
        .route(
            "/api/v1/transactions/transfer",
            post(handlers::transactions::transfer),
        )
        .route(
            "/api/v1/transactions/history/{account_id}",
            get(handlers::transactions::history),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
