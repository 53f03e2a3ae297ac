//! Business logic services.
//!
//! The orchestration core lives here: one strategy per operation kind,
//! plus the service that dispatches requests to them.

pub mod strategies;
pub mod transaction_service;
