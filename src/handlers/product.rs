// src/handlers/product.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use http::header::LOCATION;
use crate::dtos::product::{DiscountQuery, DiscountResponse, ErrorResponse, ProductRequest, ProductResponse};
use crate::state::AppState;
use crate::error::AppError;
use tracing::{error, instrument};

// GET /products - List all products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "All products", body = [ProductResponse]),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[instrument(skip(product_service))]
pub async fn get_products(
    State(AppState { product_service }): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    match product_service.get_all().await {
        Ok(products) => {
            let response = products.into_iter().map(ProductResponse::from).collect();
            Ok(Json(response))
        }
        Err(e) => {
            error!(?e, "Failed to fetch products");
            Err(e)
        }
    }
}

// GET /products/:id - Get single product
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = ProductResponse),
        (status = 404, description = "No product with this id", body = ErrorResponse),
    )
)]
#[instrument(skip(product_service))]
pub async fn get_product(
    Path(id): Path<i64>,
    State(AppState { product_service }): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = product_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;

    Ok(Json(ProductResponse::from(product)))
}

// POST /products - Create new product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse,
            headers(("Location" = String, description = "URL of the new product"))),
        (status = 400, description = "Product validation failed", body = ErrorResponse),
    )
)]
#[instrument(skip(product_service, payload))]
pub async fn create_product(
    State(AppState { product_service }): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<(StatusCode, [(http::HeaderName, String); 1], Json<ProductResponse>), AppError> {
    let product = product_service.create(payload.into()).await?;
    let location = format!("/api/products/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(ProductResponse::from(product)),
    ))
}

// PUT /products/:id - Update product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Product validation failed", body = ErrorResponse),
        (status = 404, description = "No product with this id", body = ErrorResponse),
    )
)]
#[instrument(skip(product_service, payload))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(AppState { product_service }): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = product_service.update(id, payload.into()).await?;

    Ok(Json(ProductResponse::from(product)))
}

// DELETE /products/:id - Delete product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "No product with this id", body = ErrorResponse),
    )
)]
#[instrument(skip(product_service))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(AppState { product_service }): State<AppState>,
) -> Result<StatusCode, AppError> {
    if !product_service.delete(id).await? {
        return Err(AppError::product_not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

// GET /products/:id/discount?percentage=N - Price after discount
#[utoipa::path(
    get,
    path = "/api/products/{id}/discount",
    tag = "products",
    params(("id" = i64, Path, description = "Product id"), DiscountQuery),
    responses(
        (status = 200, description = "Original and discounted price", body = DiscountResponse),
        (status = 400, description = "Percentage outside 0..=100", body = ErrorResponse),
        (status = 404, description = "No product with this id", body = ErrorResponse),
    )
)]
#[instrument(skip(product_service, query))]
pub async fn calculate_discount(
    Path(id): Path<i64>,
    State(AppState { product_service }): State<AppState>,
    Query(query): Query<DiscountQuery>,
) -> Result<Json<DiscountResponse>, AppError> {
    let quote = product_service
        .calculate_discounted_price(id, query.percentage)
        .await?;

    Ok(Json(DiscountResponse::new(quote, query.percentage)))
}
