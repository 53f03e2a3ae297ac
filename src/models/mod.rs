//! Data models for the persisted transaction record and its API types.

/// Transaction record, operation requests, and responses
pub mod transaction;
