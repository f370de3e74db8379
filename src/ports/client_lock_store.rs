//! ClientLockStore port - persists the caller's view of the client lock.
//!
//! After a successful confirm the embedding page remembers which client
//! company the roster is locked to, and hands it back as
//! `prior_locked_client_company` the next time the picker opens.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProjectId};

/// Port for remembering the locked client company per project.
///
/// Implementations report persistence failures as
/// [`ErrorCode::StorageError`](crate::domain::foundation::ErrorCode::StorageError).
#[async_trait]
pub trait ClientLockStore: Send + Sync {
    /// Record the lock after confirm. `None` means no client company.
    async fn save(&self, project_id: ProjectId, company: Option<String>) -> Result<(), DomainError>;

    /// Read the last recorded lock, if any.
    async fn find(&self, project_id: ProjectId) -> Result<Option<String>, DomainError>;
}

