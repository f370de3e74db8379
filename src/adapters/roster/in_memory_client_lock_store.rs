//! In-memory client lock store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ProjectId};
use crate::ports::ClientLockStore;

/// ClientLockStore kept in process memory.
///
/// Nothing survives a restart; the embedding page is expected to own
/// durable storage.
#[derive(Debug, Default)]
pub struct InMemoryClientLockStore {
    locks: RwLock<HashMap<ProjectId, Option<String>>>,
}

impl InMemoryClientLockStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientLockStore for InMemoryClientLockStore {
    async fn save(&self, project_id: ProjectId, company: Option<String>) -> Result<(), DomainError> {
        self.locks.write().await.insert(project_id, company);
        Ok(())
    }

    async fn find(&self, project_id: ProjectId) -> Result<Option<String>, DomainError> {
        Ok(self.locks.read().await.get(&project_id).cloned().flatten())
    }
}
