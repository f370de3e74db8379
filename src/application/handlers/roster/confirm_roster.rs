//! ConfirmRosterHandler - Confirms a session and remembers the client lock.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::roster::{RosterEvent, RosterSession, RosterSessionError, SelectedMember};
use crate::ports::ClientLockStore;

/// Result of a successful confirm.
#[derive(Debug, Clone)]
pub struct ConfirmRosterResult {
    pub project_id: ProjectId,
    pub members: Vec<SelectedMember>,
    pub locked_client_company: Option<String>,
    pub event: RosterEvent,
}

/// Errors from confirming a roster.
#[derive(Debug, Error)]
pub enum ConfirmRosterError {
    /// The session refused to confirm; the dialog stays open.
    #[error(transparent)]
    Session(#[from] RosterSessionError),

    /// The roster was confirmed but the lock could not be recorded.
    #[error("roster confirmed but client lock was not saved: {0}")]
    LockNotSaved(#[from] DomainError),
}

/// Handler for confirming roster sessions.
pub struct ConfirmRosterHandler {
    lock_store: Arc<dyn ClientLockStore>,
}

impl ConfirmRosterHandler {
    pub fn new(lock_store: Arc<dyn ClientLockStore>) -> Self {
        Self { lock_store }
    }

    pub async fn handle(
        &self,
        session: &mut RosterSession,
    ) -> Result<ConfirmRosterResult, ConfirmRosterError> {
        // 1. Export (leaves the session open on rejection)
        let confirmed = session.confirm()?;

        // 2. Remember the lock for the next open
        self.lock_store
            .save(session.project_id(), confirmed.locked_client_company.clone())
            .await?;

        Ok(ConfirmRosterResult {
            project_id: session.project_id(),
            members: confirmed.members,
            locked_client_company: confirmed.locked_client_company,
            event: confirmed.event,
        })
    }
}
