//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the roster domain and the page that embeds it. Adapters implement them.
//!
//! - `CatalogSource` - Supplies the member directory
//! - `ClientLockStore` - Persists the locked client company after confirm

mod catalog_source;
mod client_lock_store;

pub use catalog_source::CatalogSource;
pub use client_lock_store::ClientLockStore;
