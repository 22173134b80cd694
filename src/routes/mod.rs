pub mod products;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use crate::openapi::{openapi_json, swagger_ui, OPENAPI_JSON_PATH};
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
}

/// Full application with the API nested under `/api`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_router())
        .route(OPENAPI_JSON_PATH, get(openapi_json))
        .route("/swagger-ui", get(swagger_ui))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
