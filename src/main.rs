// src/main.rs
use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::fmt::init as tracing_init;

use product_catalog::config::{AppConfig, StorageBackend};
use product_catalog::database;
use product_catalog::repositories::{InMemoryProductRepository, ProductRepository, SqliteProductRepository};
use product_catalog::routes;
use product_catalog::services::ProductService;
use product_catalog::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error=%e, "Invalid configuration");
            return;
        }
    };

    // Pick the storage backend
    let repository: Arc<dyn ProductRepository> = match config.storage {
        StorageBackend::Sqlite => {
            match database::create_pool(&config.database_url, config.max_connections).await {
                Ok(pool) => Arc::new(SqliteProductRepository::new(pool)),
                Err(e) => {
                    tracing::error!(error=%e, url=%config.database_url, "Failed to create database pool");
                    return;
                }
            }
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data will not survive a restart");
            Arc::new(InMemoryProductRepository::new())
        }
    };

    // Create application state
    let app_state = AppState::new(ProductService::new(repository));
    let app = routes::app(app_state);

    // Try port..port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => { bound = Some((l, addr)); break; }
                Err(e) => {
                    if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on {}", addr);
                l
            }
            None => {
                tracing::error!("Failed to bind to any port starting at {} on {}", config.port, config.host);
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}
