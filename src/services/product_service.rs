use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use crate::error::AppError;
use crate::models::product::Product;
use crate::repositories::ProductRepository;

/// Price of a product before and after a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountedPrice {
    pub original_price: Decimal,
    pub discounted_price: Decimal,
}

/// Product use cases. Validation and existence checks happen here;
/// everything durable goes through the repository.
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        self.repository.get_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create(&self, product: Product) -> Result<Product, AppError> {
        if !product.is_valid() {
            warn!("Rejected invalid product");
            return Err(AppError::validation("Product validation failed"));
        }

        let created = self.repository.create(product).await?;
        info!(id = created.id, "Product created");
        Ok(created)
    }

    #[instrument(skip(self, product))]
    pub async fn update(&self, id: i64, mut product: Product) -> Result<Product, AppError> {
        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::product_not_found(id))?;

        if !product.is_valid() {
            warn!("Rejected invalid product");
            return Err(AppError::validation("Product validation failed"));
        }

        product.id = id;
        product.created_at = existing.created_at;
        self.repository.update(product).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.repository.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn calculate_discounted_price(
        &self,
        id: i64,
        percentage: Decimal,
    ) -> Result<DiscountedPrice, AppError> {
        let product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::product_not_found(id))?;

        Ok(DiscountedPrice {
            original_price: product.price,
            discounted_price: product.calculate_discounted_price(percentage)?,
        })
    }
}
