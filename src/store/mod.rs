//! Persistence port for users and transactions.
//!
//! The transaction service only talks to the store through `WalletStore`.
//! `PgWalletStore` is the production adapter; tests use `MemoryWalletStore`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::transaction::{NewTransaction, Transaction};
use crate::models::user::User;

pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgWalletStore;

/// Store operations the wallet core depends on.
///
/// Every call is independent: implementations are not required to give
/// snapshot consistency across calls.
#[async_trait]
pub trait WalletStore: Send + Sync {
    /// Cheap round trip used by the health check
    async fn ping(&self) -> Result<(), sqlx::Error>;

    /// First user holding the admin role
    async fn find_admin(&self) -> Result<Option<User>, sqlx::Error>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error>;

    async fn find_user_by_phone(&self, phone_number: &str) -> Result<Option<User>, sqlx::Error>;

    /// Persist `balance` and `total_money` as held in `user`.
    ///
    /// The stored values are overwritten, not incremented.
    async fn save_user(&self, user: &User) -> Result<(), sqlx::Error>;

    async fn create_transaction(&self, new: NewTransaction) -> Result<Transaction, sqlx::Error>;

    async fn find_transaction(&self, id: Uuid) -> Result<Option<Transaction>, sqlx::Error>;
}
