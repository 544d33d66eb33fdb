//! HTTP handlers for catalog endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::catalog::{
    GetProductHandler, GetProductQuery, ListProductsHandler, ListProductsQuery, ProductFilter,
};
use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ErrorCode, Page, ProductId};
use crate::ports::ProductRepository;

use super::dto::{PageParams, SearchParams};

#[derive(Clone)]
pub struct CatalogAppState {
    pub products: Arc<dyn ProductRepository>,
}

impl CatalogAppState {
    pub fn list_handler(&self) -> ListProductsHandler {
        ListProductsHandler::new(self.products.clone())
    }

    pub fn get_handler(&self) -> GetProductHandler {
        GetProductHandler::new(self.products.clone())
    }
}

/// GET /products - One page of the catalog
pub async fn list_products(
    State(state): State<CatalogAppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<Product>>, ApiError> {
    list(&state, ProductFilter::All, params).await
}

/// GET /products/search?q= - Title search, ignoring case
pub async fn search_products(
    State(state): State<CatalogAppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Page<Product>>, ApiError> {
    let page = params.page_params();
    list(&state, ProductFilter::TitleContains(params.q), page).await
}

/// GET /products/platform/:platform - Products for one platform
pub async fn products_by_platform(
    State(state): State<CatalogAppState>,
    Path(platform): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<Product>>, ApiError> {
    list(&state, ProductFilter::Platform(platform), params).await
}

/// GET /products/:id - One product
pub async fn get_product(
    State(state): State<CatalogAppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    let id = ProductId::new(id);
    state
        .get_handler()
        .handle(GetProductQuery { id })
        .await?
        .map(Json)
        .ok_or_else(|| {
            ApiError(DomainError::new(
                ErrorCode::ProductNotFound,
                format!("Product not found: {}", id),
            ))
        })
}

async fn list(
    state: &CatalogAppState,
    filter: ProductFilter,
    params: PageParams,
) -> Result<Json<Page<Product>>, ApiError> {
    let query = ListProductsQuery {
        filter,
        page: params.to_request()?,
    };
    Ok(Json(state.list_handler().handle(query).await?))
}
