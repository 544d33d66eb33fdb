//! ListProductsHandler - Query handler for paged catalog browsing.

use std::sync::Arc;

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, Page, PageRequest, ValidationError};
use crate::ports::ProductRepository;

/// Which slice of the catalog to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    All,
    /// Case-insensitive substring match on the title.
    TitleContains(String),
    /// Case-insensitive exact match on the platform.
    Platform(String),
}

#[derive(Debug, Clone)]
pub struct ListProductsQuery {
    pub filter: ProductFilter,
    pub page: PageRequest,
}

pub struct ListProductsHandler {
    products: Arc<dyn ProductRepository>,
}

impl ListProductsHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn handle(&self, query: ListProductsQuery) -> Result<Page<Product>, DomainError> {
        match query.filter {
            ProductFilter::All => self.products.find_page(query.page).await,
            ProductFilter::TitleContains(text) => {
                let text = non_blank("q", &text)?;
                self.products.search_by_title(text, query.page).await
            }
            ProductFilter::Platform(platform) => {
                let platform = non_blank("platform", &platform)?;
                self.products.find_by_platform(platform, query.page).await
            }
        }
    }
}

fn non_blank<'a>(field: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed)
}
