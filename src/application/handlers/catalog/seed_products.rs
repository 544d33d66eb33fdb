//! SeedProductsHandler - Loads demo products into an empty catalog.

use std::sync::Arc;

use thiserror::Error;

use crate::adapters::seed::{JsonFileProductSeed, SeedError};
use crate::domain::foundation::DomainError;
use crate::ports::ProductRepository;

#[derive(Debug, Error)]
pub enum SeedProductsError {
    #[error(transparent)]
    Source(#[from] SeedError),

    #[error(transparent)]
    Repository(#[from] DomainError),
}

/// What seeding did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog already had products; the file was not read.
    Skipped { existing: u64 },
    Seeded { inserted: usize },
}

pub struct SeedProductsHandler {
    products: Arc<dyn ProductRepository>,
}

impl SeedProductsHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn handle(
        &self,
        source: &JsonFileProductSeed,
    ) -> Result<SeedOutcome, SeedProductsError> {
        let existing = self.products.count().await?;
        if existing > 0 {
            tracing::debug!(existing, "Catalog not empty, skipping seed");
            return Ok(SeedOutcome::Skipped { existing });
        }

        let products = source.load().await?;
        let inserted = self.products.insert_all(products).await?.len();

        tracing::info!(
            inserted,
            path = %source.path().display(),
            "Seeded product catalog"
        );

        Ok(SeedOutcome::Seeded { inserted })
    }
}
