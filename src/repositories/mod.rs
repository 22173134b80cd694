pub mod memory;
pub mod sqlite;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::product::Product;

pub use memory::InMemoryProductRepository;
pub use sqlite::SqliteProductRepository;

/// Persistence for products. Backends own id assignment and timestamps;
/// callers never set `created_at` or `updated_at` themselves.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, AppError>;

    /// `Ok(None)` when no product has this id.
    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Ignores `product.id`; assigns a fresh id and `created_at`, clears `updated_at`.
    async fn create(&self, product: Product) -> Result<Product, AppError>;

    /// Overwrites the record matching `product.id` and stamps `updated_at`.
    async fn update(&self, product: Product) -> Result<Product, AppError>;

    /// `true` if a record was removed.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    async fn exists(&self, id: i64) -> Result<bool, AppError>;
}
