//! Domain layer containing business types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identities, tokens, IDs, paging, errors)
//! - `user` - Registered accounts
//! - `catalog` - Products and prices

pub mod catalog;
pub mod foundation;
pub mod user;
