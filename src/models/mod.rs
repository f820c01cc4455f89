//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the request/response bodies built from them.

/// Wallet holder and admin model
pub mod user;
/// Deposit and transfer records
pub mod transaction;
