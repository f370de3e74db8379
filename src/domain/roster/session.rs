//! Roster session - one open-to-close run of the member picker.
//!
//! ```text
//! Closed -> Opened -> Interacting -> Confirmed
//!              |           |      -> Cancelled
//!              +-----------+---------^
//! Confirmed / Cancelled -> Opened (reopen reruns the reconciler)
//! ```
//!
//! Confirm is reachable only while the export gate passes; a rejected
//! confirm leaves the session where it was.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{MemberId, ProjectId, StateMachine, Timestamp};

use super::{
    Catalog, CompanyGroupView, CompanyType, ConfirmRejected, GroupAggregator, ReconcileInput,
    Reconciler, RosterEvent, RosterExporter, RosterSessionError, SelectedMember, SelectionState,
    TransitionEngine, TransitionOutcome,
};

/// Lifecycle phase of a roster session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Closed,
    Opened,
    Interacting,
    Confirmed,
    Cancelled,
}

impl SessionPhase {
    /// True while the dialog accepts selection events.
    pub fn is_open(&self) -> bool {
        matches!(self, SessionPhase::Opened | SessionPhase::Interacting)
    }
}

impl StateMachine for SessionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionPhase::*;
        match self {
            Closed => vec![Opened],
            Opened => vec![Interacting, Confirmed, Cancelled],
            Interacting => vec![Interacting, Confirmed, Cancelled],
            Confirmed => vec![Opened],
            Cancelled => vec![Opened],
        }
    }
}

/// Output of a successful confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedRoster {
    pub members: Vec<SelectedMember>,
    /// The caller persists this as its view of the client lock.
    pub locked_client_company: Option<String>,
    pub event: RosterEvent,
}

/// Owns the selection for one project while the picker is open.
#[derive(Debug, Clone)]
pub struct RosterSession {
    project_id: ProjectId,
    catalog: Arc<Catalog>,
    phase: SessionPhase,
    state: SelectionState,
    protected_ids: HashSet<MemberId>,
    expanded_companies: Vec<String>,
}

impl RosterSession {
    /// Creates a closed session over a shared catalog.
    pub fn new(project_id: ProjectId, catalog: Arc<Catalog>) -> Self {
        Self {
            project_id,
            catalog,
            phase: SessionPhase::Closed,
            state: SelectionState::new(),
            protected_ids: HashSet::new(),
            expanded_companies: Vec::new(),
        }
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn expanded_companies(&self) -> &[String] {
        &self.expanded_companies
    }

    /// Opens (or reopens) the session from the caller's current roster.
    ///
    /// Any state left from a previous run is replaced.
    pub fn open(&mut self, input: &ReconcileInput) -> Result<RosterEvent, RosterSessionError> {
        self.move_to(SessionPhase::Opened)?;

        let reconciled = Reconciler::reconcile(&self.catalog, input);
        self.state = reconciled.state;
        self.protected_ids = reconciled.protected_ids;
        self.expanded_companies = reconciled.expanded_companies;

        info!(
            project_id = %self.project_id,
            members = self.state.len(),
            dropped = reconciled.dropped_ids.len(),
            "roster session opened"
        );
        Ok(RosterEvent::SessionOpened {
            project_id: self.project_id,
            member_count: self.state.len(),
            dropped_ids: reconciled.dropped_ids,
            occurred_at: Timestamp::now(),
        })
    }

    pub fn select_member(&mut self, id: &MemberId) -> Result<TransitionOutcome, RosterSessionError> {
        self.interact(|engine, state| engine.select_member(state, id))
    }

    pub fn deselect_member(&mut self, id: &MemberId) -> Result<TransitionOutcome, RosterSessionError> {
        self.interact(|engine, state| engine.deselect_member(state, id))
    }

    pub fn set_admin(&mut self, id: &MemberId) -> Result<TransitionOutcome, RosterSessionError> {
        self.interact(|engine, state| engine.set_admin(state, id))
    }

    /// Toggles the group header of `company` as shown under `query`.
    pub fn toggle_company(
        &mut self,
        company: &str,
        query: &str,
    ) -> Result<TransitionOutcome, RosterSessionError> {
        let catalog = Arc::clone(&self.catalog);
        let needle = query.to_lowercase();
        let visible: Vec<_> = catalog
            .members_of(company)
            .into_iter()
            .filter(|m| m.matches_query(&needle))
            .collect();
        self.interact(|engine, state| engine.toggle_company_all(state, company, &visible))
    }

    /// Flips whether a company group renders expanded.
    pub fn toggle_expanded(&mut self, company: &str) {
        if let Some(position) = self.expanded_companies.iter().position(|c| c == company) {
            self.expanded_companies.remove(position);
        } else {
            self.expanded_companies.push(company.to_string());
        }
    }

    /// Grouped rows for one tab of the dialog.
    pub fn view(&self, tab: CompanyType, query: &str) -> Vec<CompanyGroupView> {
        GroupAggregator::project(&self.catalog, tab, query, &self.state)
    }

    /// Why confirm is currently disabled, if it is.
    pub fn readiness(&self) -> Result<(), ConfirmRejected> {
        RosterExporter::readiness(&self.state, &self.catalog)
    }

    /// Exports the roster and closes the session.
    ///
    /// # Errors
    ///
    /// - `NotOpen` if the session is not accepting events
    /// - `Rejected` if the confirm gate fails; the session stays open
    pub fn confirm(&mut self) -> Result<ConfirmedRoster, RosterSessionError> {
        self.ensure_open()?;
        let members = RosterExporter::confirm(&self.state, &self.catalog, &self.protected_ids)?;
        self.move_to(SessionPhase::Confirmed)?;

        let locked_client_company = self.state.locked_client_company().map(str::to_owned);
        info!(
            project_id = %self.project_id,
            members = members.len(),
            locked_client_company = ?locked_client_company,
            "roster confirmed"
        );
        let event = RosterEvent::RosterConfirmed {
            project_id: self.project_id,
            member_ids: members.iter().map(|m| m.id.clone()).collect(),
            admin_id: self.state.admin_id().cloned(),
            locked_client_company: locked_client_company.clone(),
            occurred_at: Timestamp::now(),
        };
        Ok(ConfirmedRoster {
            members,
            locked_client_company,
            event,
        })
    }

    /// Discards the selection without touching any external state.
    pub fn cancel(&mut self) -> Result<RosterEvent, RosterSessionError> {
        self.move_to(SessionPhase::Cancelled)?;
        self.state = SelectionState::new();
        self.protected_ids.clear();

        info!(project_id = %self.project_id, "roster session cancelled");
        Ok(RosterEvent::SessionCancelled {
            project_id: self.project_id,
            occurred_at: Timestamp::now(),
        })
    }

    fn interact<F>(&mut self, apply: F) -> Result<TransitionOutcome, RosterSessionError>
    where
        F: FnOnce(&TransitionEngine<'_>, &mut SelectionState) -> TransitionOutcome,
    {
        self.ensure_open()?;
        let engine = TransitionEngine::new(&self.catalog);
        let outcome = apply(&engine, &mut self.state);
        self.phase = SessionPhase::Interacting;
        Ok(outcome)
    }

    fn ensure_open(&self) -> Result<(), RosterSessionError> {
        if self.phase.is_open() {
            Ok(())
        } else {
            Err(RosterSessionError::NotOpen { phase: self.phase })
        }
    }

    fn move_to(&mut self, target: SessionPhase) -> Result<(), RosterSessionError> {
        self.phase = self
            .phase
            .transition_to(target)
            .map_err(|_| RosterSessionError::InvalidTransition {
                from: self.phase,
                to: target,
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roster::test_support::{id, ids, scenario_catalog};
    use crate::domain::roster::{CompanySelection, MemberRole};

    fn open_session(input: ReconcileInput) -> RosterSession {
        let mut session = RosterSession::new(ProjectId::new(), Arc::new(scenario_catalog()));
        session.open(&input).unwrap();
        session
    }

    #[test]
    fn new_session_is_closed_and_rejects_events() {
        let mut session = RosterSession::new(ProjectId::new(), Arc::new(scenario_catalog()));

        assert_eq!(session.phase(), SessionPhase::Closed);
        assert_eq!(
            session.select_member(&id("A")),
            Err(RosterSessionError::NotOpen {
                phase: SessionPhase::Closed
            })
        );
    }

    #[test]
    fn open_reports_dropped_ids() {
        let mut session = RosterSession::new(ProjectId::new(), Arc::new(scenario_catalog()));

        let event = session.open(&ReconcileInput::new(ids(&["A", "ghost"]))).unwrap();

        match event {
            RosterEvent::SessionOpened {
                member_count,
                dropped_ids,
                ..
            } => {
                assert_eq!(member_count, 1);
                assert_eq!(dropped_ids, ids(&["ghost"]));
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(session.phase(), SessionPhase::Opened);
    }

    #[test]
    fn interaction_moves_to_interacting() {
        let mut session = open_session(ReconcileInput::default());

        session.select_member(&id("D")).unwrap();

        assert_eq!(session.phase(), SessionPhase::Interacting);
        assert_eq!(session.state().locked_client_company(), Some("Acme"));
    }

    #[test]
    fn rejected_confirm_keeps_session_open() {
        let mut session = open_session(ReconcileInput::default());
        session.select_member(&id("A")).unwrap();

        let result = session.confirm();

        assert_eq!(
            result,
            Err(RosterSessionError::Rejected(ConfirmRejected::AdminRequired))
        );
        assert_eq!(session.phase(), SessionPhase::Interacting);
    }

    #[test]
    fn confirm_straight_after_open_round_trips() {
        let mut session = open_session(
            ReconcileInput::new(ids(&["A", "D", "ghost"])).with_admin(id("A")),
        );

        let confirmed = session.confirm().unwrap();

        let exported: HashSet<_> = confirmed.members.iter().map(|m| m.id.clone()).collect();
        assert_eq!(exported, ids(&["A", "D"]).into_iter().collect::<HashSet<_>>());
        let admin = confirmed.members.iter().find(|m| m.id == id("A")).unwrap();
        assert_eq!(admin.role, MemberRole::Admin);
        assert_eq!(confirmed.locked_client_company.as_deref(), Some("Acme"));
        assert_eq!(session.phase(), SessionPhase::Confirmed);
    }

    #[test]
    fn confirmed_session_rejects_further_events_until_reopened() {
        let mut session = open_session(ReconcileInput::new(ids(&["D"])));
        session.confirm().unwrap();

        assert!(session.deselect_member(&id("D")).is_err());

        session.open(&ReconcileInput::new(ids(&["E"]))).unwrap();
        assert_eq!(session.state().selected_ids(), ids(&["E"]).as_slice());
    }

    #[test]
    fn cancel_discards_selection() {
        let mut session = open_session(ReconcileInput::new(ids(&["D"])));
        session.select_member(&id("E")).unwrap();

        session.cancel().unwrap();

        assert_eq!(session.phase(), SessionPhase::Cancelled);
        assert!(session.state().is_empty());
        assert!(session.cancel().is_err());
    }

    #[test]
    fn open_twice_without_closing_is_invalid() {
        let mut session = open_session(ReconcileInput::default());

        assert_eq!(
            session.open(&ReconcileInput::default()),
            Err(RosterSessionError::InvalidTransition {
                from: SessionPhase::Opened,
                to: SessionPhase::Opened
            })
        );
    }

    #[test]
    fn pinned_members_are_exported_as_non_deletable() {
        let mut session = open_session(
            ReconcileInput::new(ids(&["A", "B"]))
                .with_admin(id("A"))
                .with_protected_ids(ids(&["B"])),
        );

        let confirmed = session.confirm().unwrap();

        assert!(confirmed.members.iter().all(|m| !m.can_delete));
    }

    #[test]
    fn toggle_company_respects_search_query() {
        let mut session = open_session(ReconcileInput::default());

        session.toggle_company("DevCorp", "ali").unwrap();

        assert_eq!(session.state().selected_ids(), ids(&["A"]).as_slice());
        let view = session.view(CompanyType::Agency, "ali");
        assert_eq!(view[0].selection, CompanySelection::All);
        let full = session.view(CompanyType::Agency, "");
        assert_eq!(full[0].selection, CompanySelection::Partial);
    }

    #[test]
    fn toggle_company_with_blank_query_hides_every_row() {
        let mut session = open_session(ReconcileInput::default());

        let outcome = session.toggle_company("DevCorp", " ").unwrap();

        assert_eq!(outcome, TransitionOutcome::Unchanged);
        assert!(session.state().is_empty());
    }

    #[test]
    fn toggle_expanded_flips_membership() {
        let mut session = open_session(ReconcileInput::default());
        assert_eq!(session.expanded_companies(), ["DevCorp".to_string()]);

        session.toggle_expanded("Acme");
        session.toggle_expanded("DevCorp");

        assert_eq!(session.expanded_companies(), ["Acme".to_string()]);
    }

    #[test]
    fn session_phase_transitions() {
        assert!(SessionPhase::Closed.can_transition_to(&SessionPhase::Opened));
        assert!(!SessionPhase::Closed.can_transition_to(&SessionPhase::Confirmed));
        assert!(SessionPhase::Cancelled.can_transition_to(&SessionPhase::Opened));
        assert!(!SessionPhase::Confirmed.is_open());
        assert!(!SessionPhase::Closed.is_terminal());
    }
}
