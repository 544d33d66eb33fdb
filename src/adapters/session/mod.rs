//! Session store adapters.
//!
//! - `InMemorySessionStore` - the only implementation; sessions are
//!   process-local and vanish on restart.

mod in_memory;

pub use in_memory::{InMemorySessionStore, SessionPolicy};
