//! Roster adapters - implementations of the roster ports.
//!
//! - `StaticCatalogSource` - Fixed member list (mock data, tests)
//! - `JsonCatalogSource` - Member list from a JSON document or file
//! - `InMemoryClientLockStore` - Process-local lock persistence

mod in_memory_client_lock_store;
mod json_catalog_source;
mod static_catalog_source;

pub use in_memory_client_lock_store::InMemoryClientLockStore;
pub use json_catalog_source::JsonCatalogSource;
pub use static_catalog_source::StaticCatalogSource;
