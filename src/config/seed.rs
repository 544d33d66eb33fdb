//! Seed data configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Where startup seeding reads products from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// JSON array of products; seeding is skipped when unset.
    pub products_file: Option<PathBuf>,
}
