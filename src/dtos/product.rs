// src/dtos/product.rs
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::product::Product;
use crate::services::DiscountedPrice;

/// Body for both create and update. `id` and the timestamps are accepted so a
/// client can send back what it read, but the service decides their values.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub stock: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

// Prices go out as JSON numbers carrying every decimal digit.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DiscountQuery {
    /// Percent to take off, 0 through 100.
    #[serde(default)]
    pub percentage: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscountResponse {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub original_price: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub discounted_price: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub discount_percentage: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Convert from Request DTO to Model
impl From<ProductRequest> for Product {
    fn from(req: ProductRequest) -> Self {
        Self {
            id: req.id.unwrap_or_default(),
            name: req.name.unwrap_or_default(),
            description: req.description.unwrap_or_default(),
            price: req.price,
            stock: req.stock,
            created_at: req.created_at.unwrap_or_default(),
            updated_at: req.updated_at,
        }
    }
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl DiscountResponse {
    pub fn new(quote: DiscountedPrice, percentage: Decimal) -> Self {
        Self {
            original_price: quote.original_price,
            discounted_price: quote.discounted_price,
            discount_percentage: percentage,
        }
    }
}
