//! Catalog handlers.

mod get_product;
mod list_products;
mod seed_products;

pub use get_product::{GetProductHandler, GetProductQuery};
pub use list_products::{ListProductsHandler, ListProductsQuery, ProductFilter};
pub use seed_products::{SeedOutcome, SeedProductsError, SeedProductsHandler};
