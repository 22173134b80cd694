use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use product_catalog::clock::FixedClock;
use product_catalog::database::ensure_schema;
use product_catalog::error::{AppError, StorageError};
use product_catalog::models::product::Product;
use product_catalog::repositories::{ProductRepository, SqliteProductRepository};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

// One connection, otherwise every pooled connection gets its own empty in-memory database.
async fn pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();
    pool
}

async fn repository() -> SqliteProductRepository {
    SqliteProductRepository::with_clock(pool().await, Arc::new(FixedClock(t0())))
}

fn product(name: &str, price: Decimal, stock: i32) -> Product {
    Product::new(name, "", price, stock)
}

#[tokio::test]
async fn create_sets_created_at_and_persists() {
    let repo = repository().await;

    let created = repo
        .create(product("Test", Decimal::from(10), 5))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.created_at, t0());
    assert_eq!(created.updated_at, None);
    assert_eq!(repo.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_ignores_caller_supplied_id() {
    let repo = repository().await;
    let mut p = product("Test", Decimal::ONE, 1);
    p.id = 500;

    let created = repo.create(p).await.unwrap();

    assert_ne!(created.id, 500);
    assert!(!repo.exists(500).await.unwrap());
}

#[tokio::test]
async fn get_all_returns_all_products() {
    let repo = repository().await;
    repo.create(product("P1", Decimal::ONE, 1)).await.unwrap();
    repo.create(product("P2", Decimal::TWO, 2)).await.unwrap();

    let names: Vec<String> = repo
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();

    assert_eq!(names, vec!["P1", "P2"]);
}

#[tokio::test]
async fn get_by_id_round_trips_every_field() {
    let repo = repository().await;
    let created = repo
        .create(Product::new("P1", "first product", Decimal::new(1999, 2), 7))
        .await
        .unwrap();

    let loaded = repo.get_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(loaded, created);
    assert_eq!(loaded.price, Decimal::new(1999, 2));
    assert_eq!(loaded.description, "first product");
    assert!(repo.get_by_id(created.id + 1).await.unwrap().is_none());
}

#[tokio::test]
async fn update_sets_updated_at_and_persists() {
    let pool = pool().await;
    let t1 = Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap();
    let creator = SqliteProductRepository::with_clock(pool.clone(), Arc::new(FixedClock(t0())));
    let updater = SqliteProductRepository::with_clock(pool, Arc::new(FixedClock(t1)));

    let mut p = creator.create(product("P1", Decimal::ONE, 1)).await.unwrap();
    p.price = Decimal::from(5);
    let updated = updater.update(p).await.unwrap();

    assert_eq!(updated.price, Decimal::from(5));
    assert_eq!(updated.created_at, t0());
    assert_eq!(updated.updated_at, Some(t1));

    let reloaded = creator.get_by_id(updated.id).await.unwrap().unwrap();
    assert_eq!(reloaded.price, Decimal::from(5));
    assert_eq!(reloaded.updated_at, Some(t1));
}

#[tokio::test]
async fn update_of_missing_row_is_not_found() {
    let repo = repository().await;
    let mut ghost = product("Ghost", Decimal::ONE, 1);
    ghost.id = 77;

    let err = repo.update(ghost).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert!(repo.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_removes_product_and_returns_true_when_exists() {
    let repo = repository().await;
    let p = repo.create(product("P1", Decimal::ONE, 1)).await.unwrap();

    assert!(repo.delete(p.id).await.unwrap());
    assert!(repo.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_returns_false_when_not_exists() {
    let repo = repository().await;
    assert!(!repo.delete(123).await.unwrap());
}

#[tokio::test]
async fn exists_tracks_presence() {
    let repo = repository().await;
    let p = repo.create(product("P1", Decimal::ONE, 1)).await.unwrap();

    assert!(repo.exists(p.id).await.unwrap());
    assert!(!repo.exists(999).await.unwrap());
}

#[tokio::test]
async fn unreadable_price_is_reported_as_corrupt() {
    let pool = pool().await;
    sqlx::query(
        "INSERT INTO products (name, description, price, stock, created_at) VALUES ('Bad', '', 'ten', 1, ?)",
    )
    .bind(t0())
    .execute(&pool)
    .await
    .unwrap();
    let repo = SqliteProductRepository::new(pool);

    let err = repo.get_all().await.unwrap_err();

    assert!(matches!(err, AppError::Storage(StorageError::Corrupt(_))));
}

#[tokio::test]
async fn closed_pool_surfaces_as_storage_error() {
    let pool = pool().await;
    pool.close().await;
    let repo = SqliteProductRepository::new(pool);

    let err = repo.get_by_id(1).await.unwrap_err();

    assert!(matches!(err, AppError::Storage(StorageError::Database(_))));
}
