//! PostgreSQL adapter for `WalletStore`.

use async_trait::async_trait;
use uuid::Uuid;

use super::WalletStore;
use crate::db::DbPool;
use crate::models::transaction::{NewTransaction, Transaction};
use crate::models::user::{ROLE_ADMIN, User};

const USER_COLUMNS: &str = "id, role, phone_number, balance, total_money, is_verified, is_blocked, created_at, updated_at";

/// `WalletStore` backed by a sqlx connection pool.
#[derive(Debug, Clone)]
pub struct PgWalletStore {
    pool: DbPool,
}

impl PgWalletStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WalletStore for PgWalletStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_admin(&self) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = $1 ORDER BY created_at LIMIT 1"
        ))
        .bind(ROLE_ADMIN)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_user_by_phone(&self, phone_number: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE phone_number = $1"
        ))
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await
    }

    async fn save_user(&self, user: &User) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users
            SET balance = $1,
                total_money = $2,
                updated_at = NOW()
            WHERE id = $3
            "#,
        )
        .bind(user.balance)
        .bind(user.total_money)
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn create_transaction(&self, new: NewTransaction) -> Result<Transaction, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (
                transaction_type,
                amount,
                user_id,
                recipient_id,
                recipient_number
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, transaction_type, amount, user_id, recipient_id, recipient_number, created_at
            "#,
        )
        .bind(new.transaction_type)
        .bind(new.amount)
        .bind(new.user_id)
        .bind(new.recipient_id)
        .bind(new.recipient_number)
        .fetch_one(&self.pool)
        .await
    }

    async fn find_transaction(&self, id: Uuid) -> Result<Option<Transaction>, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, transaction_type, amount, user_id, recipient_id, recipient_number, created_at
            FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
