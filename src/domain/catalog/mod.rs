//! Catalog module - products offered by the store.

mod price;
mod product;

pub use price::Price;
pub use product::{NewProduct, Product};
