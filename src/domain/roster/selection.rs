//! Selection state - the mutable half of a roster session.
//!
//! # Invariants
//!
//! After every completed transition:
//!
//! - All selected client members belong to one company, and that company
//!   equals `locked_client_company`
//! - `admin_id`, if set, is selected and names an agency member
//! - `selected_ids` holds no duplicates
//!
//! The lock may outlive its last client member only when the caller pinned
//! it at reconciliation time and no client has been deselected since.

use serde::Serialize;
use std::collections::HashSet;

use crate::domain::foundation::{MemberId, ValidationError};

use super::{Catalog, Member};

/// Selected identities, admin designation, and client-company lock.
///
/// Fields are only written through the transition engine and the
/// reconciler; everything public here is read-only. The state serializes
/// for views but cannot be deserialized, so a caller restoring a roster
/// goes through [`Reconciler`](super::Reconciler).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    /// Insertion-ordered, duplicate-free.
    selected_ids: Vec<MemberId>,
    admin_id: Option<MemberId>,
    locked_client_company: Option<String>,
}

impl SelectionState {
    /// An empty selection with no admin and no lock.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        selected_ids: Vec<MemberId>,
        admin_id: Option<MemberId>,
        locked_client_company: Option<String>,
    ) -> Self {
        let mut state = Self {
            selected_ids: Vec::with_capacity(selected_ids.len()),
            admin_id: None,
            locked_client_company,
        };
        for id in selected_ids {
            state.insert(id);
        }
        state.admin_id = admin_id;
        state
    }

    pub fn selected_ids(&self) -> &[MemberId] {
        &self.selected_ids
    }

    pub fn admin_id(&self) -> Option<&MemberId> {
        self.admin_id.as_ref()
    }

    pub fn locked_client_company(&self) -> Option<&str> {
        self.locked_client_company.as_deref()
    }

    pub fn is_selected(&self, id: &MemberId) -> bool {
        self.selected_ids.contains(id)
    }

    pub fn is_admin(&self, id: &MemberId) -> bool {
        self.admin_id.as_ref() == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected_ids.len()
    }

    /// Selected members in the order they were picked.
    pub fn selected_members<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Member> {
        self.selected_ids
            .iter()
            .filter_map(|id| catalog.get(id))
            .collect()
    }

    /// Number of selected members belonging to `company`.
    pub fn selected_count_for(&self, catalog: &Catalog, company: &str) -> usize {
        self.selected_members(catalog)
            .iter()
            .filter(|m| m.company == company)
            .count()
    }

    /// True if any selected member is on the agency side.
    pub fn has_agency_member(&self, catalog: &Catalog) -> bool {
        self.selected_members(catalog).iter().any(|m| m.is_agency())
    }

    /// True if some selected client member belongs to `company`.
    pub fn has_client_from(&self, catalog: &Catalog, company: &str) -> bool {
        self.selected_members(catalog)
            .iter()
            .any(|m| m.is_client() && m.company == company)
    }

    /// Reports the first violated invariant, if any.
    pub fn check_invariants(&self, catalog: &Catalog) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(self.selected_ids.len());
        for id in &self.selected_ids {
            if !seen.insert(id) {
                return Err(ValidationError::duplicate("selected_ids", id.as_str()));
            }
            if !catalog.contains(id) {
                return Err(ValidationError::invalid_format(
                    "selected_ids",
                    format!("'{}' is not in the catalog", id),
                ));
            }
        }

        for client in self.selected_members(catalog).iter().filter(|m| m.is_client()) {
            if self.locked_client_company() != Some(client.company.as_str()) {
                return Err(ValidationError::invalid_format(
                    "locked_client_company",
                    format!(
                        "client '{}' of '{}' selected while lock is {:?}",
                        client.id, client.company, self.locked_client_company
                    ),
                ));
            }
        }

        if let Some(admin_id) = &self.admin_id {
            if !self.is_selected(admin_id) {
                return Err(ValidationError::invalid_format(
                    "admin_id",
                    format!("admin '{}' is not selected", admin_id),
                ));
            }
            if catalog.get(admin_id).map_or(true, |m| !m.is_agency()) {
                return Err(ValidationError::invalid_format(
                    "admin_id",
                    format!("admin '{}' is not an agency member", admin_id),
                ));
            }
        }

        Ok(())
    }

    /// Adds `id` unless already present. Returns true if it was added.
    pub(crate) fn insert(&mut self, id: MemberId) -> bool {
        if self.is_selected(&id) {
            return false;
        }
        self.selected_ids.push(id);
        true
    }

    /// Removes every id in `ids`. Returns how many were present.
    pub(crate) fn remove_all(&mut self, ids: &[&MemberId]) -> usize {
        let before = self.selected_ids.len();
        self.selected_ids.retain(|selected| !ids.contains(&selected));
        before - self.selected_ids.len()
    }

    pub(crate) fn set_admin(&mut self, admin_id: Option<MemberId>) {
        self.admin_id = admin_id;
    }

    pub(crate) fn set_locked_client_company(&mut self, company: Option<String>) {
        self.locked_client_company = company;
    }
}
