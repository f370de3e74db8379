//! OpenRosterSessionHandler - Loads the catalog and opens a roster session.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, MemberId, ProjectId};
use crate::domain::roster::{ReconcileInput, RosterEvent, RosterSession};
use crate::ports::{CatalogSource, ClientLockStore};

/// Command to open the member picker for a project.
#[derive(Debug, Clone)]
pub struct OpenRosterSessionCommand {
    pub project_id: ProjectId,
    pub existing_member_ids: Vec<MemberId>,
    pub existing_admin_id: Option<MemberId>,
    /// When `None`, the lock recorded at the last confirm is used.
    pub prior_locked_client_company: Option<String>,
    pub protected_ids: Vec<MemberId>,
}

impl OpenRosterSessionCommand {
    /// Opens an empty picker with no caller state.
    pub fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            existing_member_ids: Vec::new(),
            existing_admin_id: None,
            prior_locked_client_company: None,
            protected_ids: Vec::new(),
        }
    }
}

/// Result of opening a session.
#[derive(Debug)]
pub struct OpenRosterSessionResult {
    pub session: RosterSession,
    pub event: RosterEvent,
}

/// Handler for opening roster sessions.
///
/// The catalog is loaded once per open and shared read-only by the session.
pub struct OpenRosterSessionHandler {
    catalog_source: Arc<dyn CatalogSource>,
    lock_store: Arc<dyn ClientLockStore>,
}

impl OpenRosterSessionHandler {
    pub fn new(
        catalog_source: Arc<dyn CatalogSource>,
        lock_store: Arc<dyn ClientLockStore>,
    ) -> Self {
        Self {
            catalog_source,
            lock_store,
        }
    }

    pub async fn handle(
        &self,
        cmd: OpenRosterSessionCommand,
    ) -> Result<OpenRosterSessionResult, DomainError> {
        // 1. Load the directory
        let catalog = self.catalog_source.load_catalog().await?;

        // 2. Fall back to the remembered lock
        let prior_locked_client_company = match cmd.prior_locked_client_company {
            Some(company) => Some(company),
            None => self.lock_store.find(cmd.project_id).await?,
        };

        // 3. Reconcile and open
        let input = ReconcileInput {
            existing_member_ids: cmd.existing_member_ids,
            existing_admin_id: cmd.existing_admin_id,
            prior_locked_client_company,
            protected_ids: cmd.protected_ids,
        };
        let mut session = RosterSession::new(cmd.project_id, Arc::new(catalog));
        let event = session.open(&input)?;

        Ok(OpenRosterSessionResult { session, event })
    }
}
