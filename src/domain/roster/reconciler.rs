//! Reconciler - builds the opening selection from caller-supplied state.
//!
//! Runs once each time a session opens. The catalog is the source of truth:
//! ids it does not know are dropped with a warning, never an error.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

use crate::domain::foundation::MemberId;

use super::{Catalog, CompanyType, SelectionState};

/// What the embedding page already knows about the roster being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileInput {
    pub existing_member_ids: Vec<MemberId>,
    pub existing_admin_id: Option<MemberId>,
    pub prior_locked_client_company: Option<String>,
    /// Members the caller pins as non-deletable on export.
    #[serde(default)]
    pub protected_ids: Vec<MemberId>,
}

impl ReconcileInput {
    pub fn new(existing_member_ids: Vec<MemberId>) -> Self {
        Self {
            existing_member_ids,
            ..Self::default()
        }
    }

    pub fn with_admin(mut self, admin_id: MemberId) -> Self {
        self.existing_admin_id = Some(admin_id);
        self
    }

    pub fn with_locked_client_company(mut self, company: impl Into<String>) -> Self {
        self.prior_locked_client_company = Some(company.into());
        self
    }

    pub fn with_protected_ids(mut self, protected_ids: Vec<MemberId>) -> Self {
        self.protected_ids = protected_ids;
        self
    }
}

/// Opening state of a session plus its display hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub state: SelectionState,
    /// Company groups that should render expanded.
    pub expanded_companies: Vec<String>,
    /// Caller-pinned ids that exist in the catalog.
    pub protected_ids: HashSet<MemberId>,
    /// Input ids that were discarded, in input order.
    pub dropped_ids: Vec<MemberId>,
}

/// Converts caller state into a valid [`SelectionState`].
pub struct Reconciler;

impl Reconciler {
    /// Builds the opening selection.
    ///
    /// # Rules
    /// - Existing ids missing from the catalog are dropped
    /// - If existing clients span several companies, only the first
    ///   company (in input order) is kept
    /// - The lock is the company of the selected clients; with no client
    ///   selected, a prior lock naming a known client company is kept
    /// - The admin survives only if selected and on the agency side
    pub fn reconcile(catalog: &Catalog, input: &ReconcileInput) -> Reconciled {
        let mut dropped_ids = Vec::new();
        let mut selected = Vec::with_capacity(input.existing_member_ids.len());
        let mut client_company: Option<&str> = None;

        for id in &input.existing_member_ids {
            let Some(member) = catalog.get(id) else {
                warn!(member_id = %id, "existing member not in catalog, dropping");
                dropped_ids.push(id.clone());
                continue;
            };
            if member.is_client() {
                match client_company {
                    None => client_company = Some(member.company.as_str()),
                    Some(company) if company != member.company => {
                        warn!(
                            member_id = %id,
                            company = %member.company,
                            kept = company,
                            "existing roster spans several client companies, dropping"
                        );
                        dropped_ids.push(id.clone());
                        continue;
                    }
                    Some(_) => {}
                }
            }
            selected.push(id.clone());
        }

        let locked = match (client_company, input.prior_locked_client_company.as_deref()) {
            (Some(derived), Some(prior)) if derived != prior => {
                warn!(derived, prior, "prior client lock disagrees with roster, using roster");
                Some(derived.to_string())
            }
            (Some(derived), _) => Some(derived.to_string()),
            (None, Some(prior)) if catalog.companies(CompanyType::Client).contains(&prior) => {
                Some(prior.to_string())
            }
            (None, Some(prior)) => {
                warn!(prior, "prior client lock names no known client company, ignoring");
                None
            }
            (None, None) => None,
        };

        let admin_id = input.existing_admin_id.as_ref().and_then(|admin| {
            let valid = selected.contains(admin)
                && catalog.get(admin).is_some_and(|m| m.is_agency());
            if !valid {
                warn!(member_id = %admin, "existing admin is not a selected agency member, dropping");
            }
            valid.then(|| admin.clone())
        });

        let state = SelectionState::from_parts(selected, admin_id, locked);
        let protected_ids = input
            .protected_ids
            .iter()
            .filter(|id| catalog.contains(id))
            .cloned()
            .collect();

        Reconciled {
            expanded_companies: Self::expanded_companies(catalog, &state),
            state,
            protected_ids,
            dropped_ids,
        }
    }

    /// Agency companies, then every other company with a selected member.
    pub fn expanded_companies(catalog: &Catalog, state: &SelectionState) -> Vec<String> {
        let mut expanded: Vec<String> = catalog
            .companies(CompanyType::Agency)
            .into_iter()
            .map(str::to_string)
            .collect();
        for member in state.selected_members(catalog) {
            if !expanded.contains(&member.company) {
                expanded.push(member.company.clone());
            }
        }
        expanded
    }
}
