use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ProductRepository;
use crate::clock::{Clock, SystemClock};
use crate::error::AppError;
use crate::models::product::Product;

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Product>,
}

/// Process-local store. Data is lost on restart.
#[derive(Clone)]
pub struct InMemoryProductRepository {
    table: Arc<RwLock<Table>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: Arc::new(RwLock::new(Table::default())),
            clock,
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, mut product: Product) -> Result<Product, AppError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        product.id = table.last_id;
        product.created_at = self.clock.now();
        product.updated_at = None;
        table.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, mut product: Product) -> Result<Product, AppError> {
        let mut table = self.table.write().await;
        let slot = table
            .rows
            .get_mut(&product.id)
            .ok_or_else(|| AppError::product_not_found(product.id))?;
        product.updated_at = Some(self.clock.now());
        *slot = product.clone();
        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }
}
