//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: Database entity representing a deposit or transfer
//! - `TransactionRequest`: Request body shared by both operations
//! - `TransactionResponse`: Response body with `user` and `recipient` expanded

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::user::{User, UserResponse};

/// The two kinds of money movement the service records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// Admin-mediated funding of a user's balance
    Deposit,
    /// User-to-user movement with a tiered fee
    Transfer,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Transfer => "transfer",
        }
    }

    /// Whether a declared type string names this variant.
    pub fn matches(self, declared: &str) -> bool {
        self.as_str() == declared
    }
}

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. Records are created once per
/// successful operation and never updated.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Transaction {
    /// Unique identifier for this transaction
    pub id: Uuid,

    /// `deposit` or `transfer`
    pub transaction_type: String,

    /// Amount moved, excluding any fee
    pub amount: i64,

    /// Sender as given in the request
    ///
    /// Not guaranteed to reference an existing user on the deposit path.
    pub user_id: Uuid,

    /// Resolved recipient
    pub recipient_id: Uuid,

    /// Recipient phone number supplied with a transfer
    pub recipient_number: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Fields required to insert a transaction record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub transaction_type: String,
    pub amount: i64,
    pub user_id: Uuid,
    pub recipient_id: Uuid,
    pub recipient_number: Option<String>,
}

/// Request body for deposits and transfers.
///
/// # JSON Example (deposit)
///
/// ```json
/// {
///   "type": "deposit",
///   "amount": 500,
///   "user": "550e8400-e29b-41d4-a716-446655440000",
///   "recipient": "660e8400-e29b-41d4-a716-446655440001"
/// }
/// ```
///
/// # JSON Example (transfer)
///
/// ```json
/// {
///   "type": "transfer",
///   "amount": 150,
///   "user": "550e8400-e29b-41d4-a716-446655440000",
///   "recipient_number": "01700000002"
/// }
/// ```
///
/// `type` stays a plain string: a mismatched type is a business-rule
/// failure reported by the service, not a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRequest {
    #[serde(rename = "type")]
    pub transaction_type: String,

    pub amount: i64,

    /// Sender id
    pub user: Uuid,

    /// Recipient id (deposit path)
    #[serde(default)]
    pub recipient: Option<Uuid>,

    /// Recipient phone number (transfer path)
    #[serde(default)]
    pub recipient_number: Option<String>,
}

impl TransactionRequest {
    /// Shape checks applied before the request reaches the service.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.amount <= 0 {
            return Err(AppError::BadRequest("Amount must be positive".to_string()));
        }
        Ok(())
    }
}

/// Response returned for transaction operations.
///
/// `user` and `recipient` are expanded to full user records; `user` is
/// `null` when a deposit named a sender that does not exist.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "770e8400-e29b-41d4-a716-446655440002",
///   "type": "transfer",
///   "amount": 150,
///   "user": { "id": "550e8400-...", "role": "user", ... },
///   "recipient": { "id": "660e8400-...", "role": "user", ... },
///   "recipient_number": "01700000002",
///   "created_at": "2025-12-21T16:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct TransactionResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub amount: i64,
    pub user: Option<UserResponse>,
    pub recipient: Option<UserResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TransactionResponse {
    /// Expand a stored record with the parties it references.
    pub fn populate(transaction: Transaction, user: Option<User>, recipient: Option<User>) -> Self {
        Self {
            id: transaction.id,
            transaction_type: transaction.transaction_type,
            amount: transaction.amount,
            user: user.map(Into::into),
            recipient: recipient.map(Into::into),
            recipient_number: transaction.recipient_number,
            created_at: transaction.created_at,
        }
    }
}
