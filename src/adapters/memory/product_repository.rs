//! In-memory product repository for development and tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::catalog::{NewProduct, Product};
use crate::domain::foundation::{DomainError, Page, PageRequest, ProductId};
use crate::ports::ProductRepository;

#[derive(Debug, Default)]
struct Products {
    next_id: i64,
    rows: BTreeMap<ProductId, Product>,
}

impl Products {
    fn page_where(&self, request: PageRequest, keep: impl Fn(&Product) -> bool) -> Page<Product> {
        let matching: Vec<Product> = self.rows.values().filter(|p| keep(*p)).cloned().collect();
        Page::from_sorted(matching, request)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Products>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_page(&self, request: PageRequest) -> Result<Page<Product>, DomainError> {
        Ok(self.products.read().await.page_where(request, |_| true))
    }

    async fn search_by_title(
        &self,
        query: &str,
        request: PageRequest,
    ) -> Result<Page<Product>, DomainError> {
        let needle = query.to_lowercase();
        Ok(self
            .products
            .read()
            .await
            .page_where(request, |p| p.title.to_lowercase().contains(&needle)))
    }

    async fn find_by_platform(
        &self,
        platform: &str,
        request: PageRequest,
    ) -> Result<Page<Product>, DomainError> {
        let platform = platform.to_lowercase();
        Ok(self
            .products
            .read()
            .await
            .page_where(request, |p| p.platform.to_lowercase() == platform))
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        Ok(self.products.read().await.rows.get(&id).cloned())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.products.read().await.rows.len() as u64)
    }

    async fn insert_all(&self, products: Vec<NewProduct>) -> Result<Vec<Product>, DomainError> {
        let mut store = self.products.write().await;
        let mut inserted = Vec::with_capacity(products.len());

        for new in products {
            store.next_id += 1;
            let product = Product::from_new(ProductId::new(store.next_id), new);
            store.rows.insert(product.id, product.clone());
            inserted.push(product);
        }

        Ok(inserted)
    }
}
