//! Router construction and shared handler state.

use std::sync::Arc;

use axum::{Router, routing::get, routing::post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::services::transaction_service::{AdminSource, TransactionService};
use crate::store::WalletStore;

/// State shared with every handler via `State` extraction.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WalletStore>,
    pub transactions: TransactionService,
}

impl AppState {
    pub fn new(store: Arc<dyn WalletStore>, admin: AdminSource) -> Self {
        let transactions = TransactionService::new(store.clone(), admin);
        Self {
            store,
            transactions,
        }
    }
}

/// Build the HTTP router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/api/v1/transactions/deposit",
            post(handlers::transactions::create_deposit),
        )
        .route(
            "/api/v1/transactions/transfer",
            post(handlers::transactions::create_transfer),
        )
        .route(
            "/api/v1/transactions/{id}",
            get(handlers::transactions::get_transaction),
        )
        .route("/api/v1/users/{id}", get(handlers::users::get_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
