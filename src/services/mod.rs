//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They resolve parties, enforce the wallet rules and drive the store.

pub mod transaction_service;
