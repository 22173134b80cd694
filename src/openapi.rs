use axum::response::Html;
use axum::Json;
use utoipa::OpenApi;

use crate::dtos::product::{DiscountResponse, ErrorResponse, ProductRequest, ProductResponse};
use crate::handlers::product;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Processing API",
        version = "v1",
        description = "Product catalog with validation and discount calculation"
    ),
    paths(
        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,
        product::calculate_discount,
    ),
    components(schemas(ProductRequest, ProductResponse, DiscountResponse, ErrorResponse)),
    tags((name = "products", description = "Product catalog operations"))
)]
pub struct ApiDoc;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

// Swagger UI assets come from the public CDN; only the page shell is served here.
const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Product Processing API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// GET /swagger-ui
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}
