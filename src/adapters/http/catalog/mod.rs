//! Product catalog HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{PageParams, SearchParams};
pub use handlers::CatalogAppState;
pub use routes::{catalog_router, catalog_routes};
