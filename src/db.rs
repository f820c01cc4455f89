//! PostgreSQL pool setup and embedded migrations.

use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

/// Connect a pool of at most `max_connections` to `database_url`.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Apply the `users` and `transactions` schema from `migrations/`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
