//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Hands it to the transaction service or the store
//! 3. Returns HTTP response (JSON, status code)

/// Liveness and database connectivity
pub mod health;
/// Deposit, transfer and lookup endpoints
pub mod transactions;
/// User lookup endpoint
pub mod users;
