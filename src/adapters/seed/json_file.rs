//! Product seed data read from a JSON file.
//!
//! The file holds a JSON array of products with camelCase keys:
//!
//! ```json
//! [{ "title": "Hades", "platform": "PC", "price": 24.99, "releaseDate": "2020-09-17" }]
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::catalog::NewProduct;
use crate::domain::foundation::ValidationError;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid product at index {index}: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// Loads seed products from disk.
#[derive(Debug, Clone)]
pub struct JsonFileProductSeed {
    path: PathBuf,
}

impl JsonFileProductSeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and validates every product in the file.
    pub async fn load(&self) -> Result<Vec<NewProduct>, SeedError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| SeedError::Io {
            path: self.path.clone(),
            source,
        })?;

        let products: Vec<NewProduct> =
            serde_json::from_slice(&bytes).map_err(|source| SeedError::Parse {
                path: self.path.clone(),
                source,
            })?;

        for (index, product) in products.iter().enumerate() {
            product
                .validate()
                .map_err(|source| SeedError::Invalid { index, source })?;
        }

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn seed_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn loads_products_from_json_array() {
        let file = seed_file(
            r#"[
                {"title": "Hades", "platform": "PC", "price": 24.99},
                {"title": "Celeste", "platform": "Switch"}
            ]"#,
        );

        let products = JsonFileProductSeed::new(file.path()).load().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price.unwrap().cents(), 2499);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let seed = JsonFileProductSeed::new("/definitely/not/here.json");
        assert!(matches!(seed.load().await, Err(SeedError::Io { .. })));
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let file = seed_file("{ not json");
        let result = JsonFileProductSeed::new(file.path()).load().await;
        assert!(matches!(result, Err(SeedError::Parse { .. })));
    }

    #[tokio::test]
    async fn blank_title_is_reported_with_index() {
        let file = seed_file(
            r#"[{"title": "Hades", "platform": "PC"}, {"title": "", "platform": "PC"}]"#,
        );
        let result = JsonFileProductSeed::new(file.path()).load().await;
        assert!(matches!(result, Err(SeedError::Invalid { index: 1, .. })));
    }

    #[tokio::test]
    async fn bundled_demo_catalog_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/products.json");
        let products = JsonFileProductSeed::new(path).load().await.unwrap();
        assert!(!products.is_empty());
    }
}
