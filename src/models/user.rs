//! User data models and API response types.
//!
//! This module defines:
//! - `User`: Database entity representing a wallet holder or the admin
//! - `UserResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Role of the single platform administrator.
pub const ROLE_ADMIN: &str = "admin";

/// Role of a regular wallet holder.
pub const ROLE_USER: &str = "user";

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table. Exactly one row is expected to carry the
/// `admin` role; it collects transfer fees in `balance` and the running
/// total of deposits in `total_money`.
///
/// # Balance Storage
///
/// Balances are whole wallet units stored as `i64`, never floats.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique identifier for this user
    pub id: Uuid,

    /// Either `admin` or `user`
    pub role: String,

    /// Phone number, unique across users
    ///
    /// Transfers address their recipient by this number.
    pub phone_number: String,

    /// Wallet funds
    pub balance: i64,

    /// Aggregate of all deposits (only meaningful for the admin)
    pub total_money: i64,

    /// Whether the user completed verification
    pub is_verified: bool,

    /// Blocked users cannot receive money
    pub is_blocked: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    pub fn is_regular_user(&self) -> bool {
        self.role == ROLE_USER
    }
}

/// Response body for user records, embedded in populated transactions.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "role": "user",
///   "phone_number": "01700000001",
///   "balance": 1500,
///   "is_verified": true,
///   "is_blocked": false,
///   "created_at": "2025-12-20T10:00:00Z",
///   "updated_at": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub role: String,
    pub phone_number: String,
    pub balance: i64,

    /// Only present for the admin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_money: Option<i64>,

    pub is_verified: bool,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Convert database User to API UserResponse.
///
/// `total_money` is dropped for regular users.
impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let total_money = user.is_admin().then_some(user.total_money);
        Self {
            id: user.id,
            role: user.role,
            phone_number: user.phone_number,
            balance: user.balance,
            total_money,
            is_verified: user.is_verified,
            is_blocked: user.is_blocked,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
