//! Seed data adapters.

mod json_file;

pub use json_file::{JsonFileProductSeed, SeedError};
