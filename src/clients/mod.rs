//! Clients for external collaborator services.

/// Account service client (balance reads and mutations)
pub mod account;
