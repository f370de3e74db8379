//! JSON catalog source - members read from a JSON array.
//!
//! Accepts the same camelCase shape the dialog's mock data uses:
//!
//! ```json
//! [{ "id": "a-1", "name": "Kim", "company": "DevCorp", "companyType": "agency", "position": "PM" }]
//! ```

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::config::{CatalogConfig, ConfigError, ValidationError};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::roster::Member;
use crate::ports::CatalogSource;

#[derive(Debug, Clone)]
enum JsonOrigin {
    Inline(String),
    File(PathBuf),
}

/// CatalogSource backed by a JSON document or file.
///
/// Files are re-read on every fetch, so each session sees the current
/// directory.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    origin: JsonOrigin,
}

impl JsonCatalogSource {
    /// Source over an in-memory JSON document.
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            origin: JsonOrigin::Inline(json.into()),
        }
    }

    /// Source over a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            origin: JsonOrigin::File(path.as_ref().to_path_buf()),
        }
    }

    /// Source over the configured catalog file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no catalog path is configured.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, ConfigError> {
        let path = config
            .path
            .as_ref()
            .ok_or(ValidationError::MissingRequired("catalog.path"))?;
        Ok(Self::from_path(path))
    }

    fn parse(json: &str) -> Result<Vec<Member>, DomainError> {
        serde_json::from_str(json).map_err(|e| {
            DomainError::new(ErrorCode::InvalidFormat, format!("Invalid catalog JSON: {}", e))
        })
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogSource {
    async fn fetch_members(&self) -> Result<Vec<Member>, DomainError> {
        match &self.origin {
            JsonOrigin::Inline(json) => Self::parse(json),
            JsonOrigin::File(path) => {
                let json = tokio::fs::read_to_string(path).await.map_err(|e| {
                    tracing::error!("Failed to read catalog file {}: {}", path.display(), e);
                    DomainError::new(
                        ErrorCode::CatalogUnavailable,
                        format!("Cannot read catalog file: {}", e),
                    )
                    .with_detail("path", path.display().to_string())
                })?;
                Self::parse(&json)
            }
        }
    }
}
