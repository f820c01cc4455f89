//! In-memory `WalletStore` for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::WalletStore;
use crate::models::transaction::{NewTransaction, Transaction};
use crate::models::user::{ROLE_ADMIN, ROLE_USER, User};

#[derive(Debug, Default)]
pub struct MemoryWalletStore {
    users: RwLock<HashMap<Uuid, User>>,
    transactions: RwLock<Vec<Transaction>>,
}

impl MemoryWalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, user: User) -> User {
        self.users.write().await.insert(user.id, user.clone());
        user
    }

    pub async fn user(&self, id: Uuid) -> User {
        self.users.read().await[&id].clone()
    }

    pub async fn transaction_count(&self) -> usize {
        self.transactions.read().await.len()
    }
}

/// Verified, unblocked user with the given phone and balance.
pub fn user(phone_number: &str, balance: i64) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        role: ROLE_USER.to_string(),
        phone_number: phone_number.to_string(),
        balance,
        total_money: 0,
        is_verified: true,
        is_blocked: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn admin() -> User {
    User {
        role: ROLE_ADMIN.to_string(),
        ..user("01700000000", 0)
    }
}

#[async_trait]
impl WalletStore for MemoryWalletStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn find_admin(&self) -> Result<Option<User>, sqlx::Error> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.is_admin())
            .cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_user_by_phone(&self, phone_number: &str) -> Result<Option<User>, sqlx::Error> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.phone_number == phone_number)
            .cloned())
    }

    async fn save_user(&self, user: &User) -> Result<(), sqlx::Error> {
        if let Some(stored) = self.users.write().await.get_mut(&user.id) {
            stored.balance = user.balance;
            stored.total_money = user.total_money;
            stored.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn create_transaction(&self, new: NewTransaction) -> Result<Transaction, sqlx::Error> {
        let transaction = Transaction {
            id: Uuid::new_v4(),
            transaction_type: new.transaction_type,
            amount: new.amount,
            user_id: new.user_id,
            recipient_id: new.recipient_id,
            recipient_number: new.recipient_number,
            created_at: Utc::now(),
        };
        self.transactions.write().await.push(transaction.clone());
        Ok(transaction)
    }

    async fn find_transaction(&self, id: Uuid) -> Result<Option<Transaction>, sqlx::Error> {
        Ok(self
            .transactions
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }
}
