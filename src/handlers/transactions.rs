//! Transaction HTTP handlers.
//!
//! This module implements transaction-related API endpoints:
//! - POST /api/v1/transactions/deposit - Fund a user's wallet
//! - POST /api/v1/transactions/transfer - Send money to another user by phone
//! - GET /api/v1/transactions/{id} - Get transaction details

use crate::{
    app::AppState,
    error::AppError,
    models::transaction::{TransactionRequest, TransactionResponse},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// Deposit into a user's wallet.
///
/// # Request Body
///
/// ```json
/// {
///   "type": "deposit",
///   "amount": 500,
///   "user": "550e8400-...",
///   "recipient": "660e8400-..."
/// }
/// ```
///
/// # Response (201)
///
/// The recorded transaction with `user` and `recipient` expanded.
pub async fn create_deposit(
    State(state): State<AppState>,
    Json(request): Json<TransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), AppError> {
    request.validate()?;

    let transaction = state.transactions.create_deposit(request).await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Transfer money to the user owning `recipient_number`.
///
/// # Validation
///
/// - Amount must be at least 50
/// - Sender must cover the amount plus a fee of 5 on transfers of 100 or more
/// - Recipient must be a verified, unblocked user with a different phone
pub async fn create_transfer(
    State(state): State<AppState>,
    Json(request): Json<TransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), AppError> {
    request.validate()?;

    let transaction = state.transactions.create_transfer(request).await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Get transaction by ID.
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
) -> Result<Json<TransactionResponse>, AppError> {
    let transaction = state
        .transactions
        .get_transaction(transaction_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Transaction not found".to_string()))?;

    Ok(Json(transaction))
}
