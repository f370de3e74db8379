//! Adapters - Implementations of port interfaces.
//!
//! - `roster` - Catalog sources and client lock storage

pub mod roster;

pub use roster::{InMemoryClientLockStore, JsonCatalogSource, StaticCatalogSource};
