use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::error::AppError;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    ensure_schema(&pool).await?;

    tracing::info!(
        "Database connection established with {} max connections",
        max_connections
    );

    Ok(pool)
}

/// Creates the `products` table if it is missing. Existing data is left alone.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS products (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            price       TEXT NOT NULL,
            stock       INTEGER NOT NULL,
            created_at  TEXT NOT NULL,
            updated_at  TEXT
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
