//! Transition Engine - the only writer of [`SelectionState`].
//!
//! Every operation is total: it applies, leaves the state untouched, or
//! rejects with a reason. None of them fail. Rejections mirror a UI that
//! would have disabled the control in the first place, so callers are free
//! to ignore them.

use tracing::debug;

use crate::domain::foundation::MemberId;

use super::{Catalog, CompanySelection, GroupAggregator, Member, SelectionRejection, SelectionState};

/// Result of a single transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The state changed.
    Applied,
    /// The request was valid but the state already satisfied it.
    Unchanged,
    /// The request was ignored.
    Rejected(SelectionRejection),
}

impl TransitionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TransitionOutcome::Applied)
    }

    pub fn rejection(&self) -> Option<&SelectionRejection> {
        match self {
            TransitionOutcome::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Applies toggle, group toggle, and admin events against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct TransitionEngine<'c> {
    catalog: &'c Catalog,
}

impl<'c> TransitionEngine<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Adds a member to the selection.
    ///
    /// The first client member picked locks its company; clients of any
    /// other company are rejected until that lock clears.
    pub fn select_member(&self, state: &mut SelectionState, id: &MemberId) -> TransitionOutcome {
        let Some(member) = self.catalog.get(id) else {
            return reject(SelectionRejection::UnknownMember(id.clone()));
        };
        if let Some(rejection) = lock_conflict(member, state) {
            return reject(rejection);
        }

        let mut changed = state.insert(id.clone());
        if member.is_client() && state.locked_client_company().is_none() {
            state.set_locked_client_company(Some(member.company.clone()));
            changed = true;
        }

        if changed {
            debug!(member_id = %id, company = %member.company, "member selected");
            TransitionOutcome::Applied
        } else {
            TransitionOutcome::Unchanged
        }
    }

    /// Removes a member from the selection.
    ///
    /// Clears the admin designation if it pointed at this member, and the
    /// client lock if this was the last selected member of that company.
    pub fn deselect_member(&self, state: &mut SelectionState, id: &MemberId) -> TransitionOutcome {
        if !state.is_selected(id) {
            return TransitionOutcome::Unchanged;
        }
        self.remove_batch(state, &[id]);
        debug!(member_id = %id, "member deselected");
        TransitionOutcome::Applied
    }

    /// Checks or unchecks a whole company group.
    ///
    /// `members` is the list the group header covers (usually the filtered
    /// rows of that company); entries from other companies or absent from
    /// the catalog are ignored. A fully selected group is removed as a
    /// single batch, with admin and lock clearing evaluated once the whole
    /// batch is gone. Otherwise every listed member is added, and a client
    /// group becomes the locked company.
    pub fn toggle_company_all(
        &self,
        state: &mut SelectionState,
        company: &str,
        members: &[&Member],
    ) -> TransitionOutcome {
        let targets: Vec<&Member> = members
            .iter()
            .filter_map(|m| self.catalog.get(&m.id))
            .filter(|m| m.company == company)
            .collect();
        if targets.is_empty() {
            return TransitionOutcome::Unchanged;
        }

        if GroupAggregator::company_selection_state(company, &targets, state)
            == CompanySelection::All
        {
            let ids: Vec<&MemberId> = targets.iter().map(|m| &m.id).collect();
            self.remove_batch(state, &ids);
            debug!(company, count = ids.len(), "company group deselected");
            return TransitionOutcome::Applied;
        }

        if let Some(rejection) = targets.iter().find_map(|m| lock_conflict(m, state)) {
            return reject(rejection);
        }

        let added = targets
            .iter()
            .filter(|m| state.insert(m.id.clone()))
            .count();
        if targets.iter().any(|m| m.is_client()) {
            state.set_locked_client_company(Some(company.to_string()));
        }
        debug!(company, added, "company group selected");
        TransitionOutcome::Applied
    }

    /// Designates an agency member as admin, selecting them if needed.
    pub fn set_admin(&self, state: &mut SelectionState, id: &MemberId) -> TransitionOutcome {
        let Some(member) = self.catalog.get(id) else {
            return reject(SelectionRejection::UnknownMember(id.clone()));
        };
        if !member.is_agency() {
            return reject(SelectionRejection::AdminMustBeAgency(id.clone()));
        }
        if state.is_admin(id) && state.is_selected(id) {
            return TransitionOutcome::Unchanged;
        }

        state.insert(id.clone());
        state.set_admin(Some(id.clone()));
        debug!(member_id = %id, "admin designated");
        TransitionOutcome::Applied
    }

    /// Removes `ids` and then applies the admin and lock clearing rules once.
    fn remove_batch(&self, state: &mut SelectionState, ids: &[&MemberId]) {
        state.remove_all(ids);

        if state.admin_id().is_some_and(|admin| ids.contains(&admin)) {
            state.set_admin(None);
        }

        let Some(locked) = state.locked_client_company().map(str::to_owned) else {
            return;
        };
        let removed_locked_client = ids
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .any(|m| m.is_client() && m.company == locked);
        if removed_locked_client && !state.has_client_from(self.catalog, &locked) {
            debug!(company = %locked, "client company lock cleared");
            state.set_locked_client_company(None);
        }
    }
}

fn lock_conflict(member: &Member, state: &SelectionState) -> Option<SelectionRejection> {
    if GroupAggregator::is_company_selectable(
        &member.company,
        member.company_type,
        state.locked_client_company(),
    ) {
        return None;
    }
    Some(SelectionRejection::ClientCompanyLocked {
        company: member.company.clone(),
        locked: state.locked_client_company().unwrap_or_default().to_string(),
    })
}

fn reject(rejection: SelectionRejection) -> TransitionOutcome {
    debug!(reason = %rejection, "selection request rejected");
    TransitionOutcome::Rejected(rejection)
}
