//! Axum router configuration for catalog endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    get_product, list_products, products_by_platform, search_products, CatalogAppState,
};

/// Create the catalog API router.
///
/// # Routes (require authentication)
/// - `GET /?page&size` - Paged catalog
/// - `GET /search?q&page&size` - Title search
/// - `GET /platform/:platform?page&size` - By platform
/// - `GET /:id` - One product
pub fn catalog_routes() -> Router<CatalogAppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/search", get(search_products))
        .route("/platform/:platform", get(products_by_platform))
        .route("/:id", get(get_product))
}

/// The catalog router mounted at `/products`, with its state applied.
pub fn catalog_router(state: CatalogAppState) -> Router {
    Router::new()
        .nest("/products", catalog_routes())
        .with_state(state)
}
