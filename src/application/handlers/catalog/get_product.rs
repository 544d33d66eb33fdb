//! Product lookup by id.

use std::sync::Arc;

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ProductId};
use crate::ports::ProductRepository;

#[derive(Debug, Clone, Copy)]
pub struct GetProductQuery {
    pub id: ProductId,
}

pub struct GetProductHandler {
    products: Arc<dyn ProductRepository>,
}

impl GetProductHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn handle(&self, query: GetProductQuery) -> Result<Option<Product>, DomainError> {
        self.products.find_by_id(query.id).await
    }
}
