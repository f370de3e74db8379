//! Catalog source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the member directory is read from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Path to a JSON member list. Unset when the embedding page supplies
    /// members directly.
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if path.extension().map_or(true, |ext| ext != "json") => {
                Err(ValidationError::InvalidCatalogPath)
            }
            _ => Ok(()),
        }
    }
}
