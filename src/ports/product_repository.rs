//! Product repository port.

use async_trait::async_trait;

use crate::domain::catalog::{NewProduct, Product};
use crate::domain::foundation::{DomainError, Page, PageRequest, ProductId};

/// Read access to the catalog, plus bulk insert for seeding.
///
/// All paged queries order by id.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_page(&self, request: PageRequest) -> Result<Page<Product>, DomainError>;

    /// Products whose title contains `query`, ignoring case.
    async fn search_by_title(
        &self,
        query: &str,
        request: PageRequest,
    ) -> Result<Page<Product>, DomainError>;

    /// Products whose platform equals `platform`, ignoring case.
    async fn find_by_platform(
        &self,
        platform: &str,
        request: PageRequest,
    ) -> Result<Page<Product>, DomainError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    async fn insert_all(&self, products: Vec<NewProduct>) -> Result<Vec<Product>, DomainError>;
}
