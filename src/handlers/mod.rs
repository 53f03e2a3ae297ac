//! HTTP request handlers (route handlers).
//!
//! Handlers are the thin adapter between axum and the orchestration
//! core: they validate request preconditions, call the service, and
//! serialize the resulting record.

/// Service health endpoint
pub mod health;
/// Deposit, withdraw, transfer, and history endpoints
pub mod transactions;
