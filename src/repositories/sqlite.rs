use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, SqlitePool};
use tracing::{debug, instrument};

use super::ProductRepository;
use crate::clock::{Clock, SystemClock};
use crate::error::{AppError, StorageError};
use crate::models::product::Product;

const PRODUCT_COLUMNS: &str = "id, name, description, price, stock, created_at, updated_at";

// Prices are kept as TEXT so they round-trip without float loss.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: String,
    stock: i32,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ProductRow> for Product {
    type Error = StorageError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = row
            .price
            .parse::<Decimal>()
            .map_err(|e| StorageError::Corrupt(format!("product {} has price {:?}: {e}", row.id, row.price)))?;

        Ok(Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price,
            stock: row.stock,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_clock(pool, Arc::new(SystemClock))
    }

    pub fn with_clock(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        let products = rows
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::try_from).transpose()?)
    }

    #[instrument(skip(self, product), fields(name = %product.name))]
    async fn create(&self, product: Product) -> Result<Product, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "INSERT INTO products (name, description, price, stock, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, NULL)
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.to_string())
        .bind(product.stock)
        .bind(self.clock.now())
        .fetch_one(&self.pool)
        .await?;

        let created = Product::try_from(row)?;
        debug!(id = created.id, "Inserted product");
        Ok(created)
    }

    #[instrument(skip(self, product), fields(id = product.id))]
    async fn update(&self, product: Product) -> Result<Product, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "UPDATE products SET
             name = ?,
             description = ?,
             price = ?,
             stock = ?,
             created_at = ?,
             updated_at = ?
             WHERE id = ?
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.to_string())
        .bind(product.stock)
        .bind(product.created_at)
        .bind(self.clock.now())
        .bind(product.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::product_not_found(product.id))?;

        Ok(Product::try_from(row)?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }
}
