//! Exporter - turns a finished selection into roster records.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

use crate::domain::foundation::MemberId;

use super::{Catalog, CompanyType, ConfirmRejected, SelectionState};

/// Authority of a member within the confirmed roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Admin,
    Regular,
}

/// One confirmed roster entry, handed to the embedding page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedMember {
    pub id: MemberId,
    pub name: String,
    pub company: String,
    pub company_type: CompanyType,
    pub position: String,
    pub role: MemberRole,
    /// False for the admin and for caller-pinned members.
    pub can_delete: bool,
}

/// Confirm gate and roster export.
pub struct RosterExporter;

impl RosterExporter {
    /// Explains why confirm is disabled, if it is.
    ///
    /// An empty selection is never confirmable. A selection with any agency
    /// member needs an admin; a client-only selection does not.
    pub fn readiness(state: &SelectionState, catalog: &Catalog) -> Result<(), ConfirmRejected> {
        if state.is_empty() {
            return Err(ConfirmRejected::EmptySelection);
        }
        if state.admin_id().is_none() && state.has_agency_member(catalog) {
            return Err(ConfirmRejected::AdminRequired);
        }
        Ok(())
    }

    pub fn can_confirm(state: &SelectionState, catalog: &Catalog) -> bool {
        Self::readiness(state, catalog).is_ok()
    }

    /// Exports the selection in pick order.
    ///
    /// # Errors
    ///
    /// Returns the [`readiness`](Self::readiness) rejection unchanged; the
    /// caller keeps the dialog open.
    pub fn confirm(
        state: &SelectionState,
        catalog: &Catalog,
        prior_protected_ids: &HashSet<MemberId>,
    ) -> Result<Vec<SelectedMember>, ConfirmRejected> {
        Self::readiness(state, catalog)?;

        let mut seen = HashSet::with_capacity(state.len());
        let mut roster = Vec::with_capacity(state.len());
        for id in state.selected_ids() {
            if !seen.insert(id) {
                continue;
            }
            let Some(member) = catalog.get(id) else {
                warn!(member_id = %id, "selected member vanished from catalog, skipping");
                continue;
            };
            let role = if state.is_admin(id) {
                MemberRole::Admin
            } else {
                MemberRole::Regular
            };
            roster.push(SelectedMember {
                id: member.id.clone(),
                name: member.name.clone(),
                company: member.company.clone(),
                company_type: member.company_type,
                position: member.position.clone(),
                role,
                can_delete: role != MemberRole::Admin && !prior_protected_ids.contains(id),
            });
        }
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roster::test_support::{id, ids, scenario_catalog};

    fn no_protected() -> HashSet<MemberId> {
        HashSet::new()
    }

    #[test]
    fn empty_selection_cannot_confirm() {
        let catalog = scenario_catalog();
        let state = SelectionState::new();

        assert_eq!(
            RosterExporter::readiness(&state, &catalog),
            Err(ConfirmRejected::EmptySelection)
        );
        assert_eq!(
            RosterExporter::confirm(&state, &catalog, &no_protected()),
            Err(ConfirmRejected::EmptySelection)
        );
    }

    #[test]
    fn agency_member_without_admin_cannot_confirm() {
        let catalog = scenario_catalog();
        let state = SelectionState::from_parts(ids(&["A", "D"]), None, Some("Acme".into()));

        assert!(!RosterExporter::can_confirm(&state, &catalog));
        assert_eq!(
            RosterExporter::readiness(&state, &catalog),
            Err(ConfirmRejected::AdminRequired)
        );
    }

    #[test]
    fn client_only_selection_needs_no_admin() {
        let catalog = scenario_catalog();
        let state = SelectionState::from_parts(ids(&["D"]), None, Some("Acme".into()));

        let roster = RosterExporter::confirm(&state, &catalog, &no_protected()).unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].role, MemberRole::Regular);
        assert!(roster[0].can_delete);
    }

    #[test]
    fn admin_record_is_not_deletable() {
        let catalog = scenario_catalog();
        let state = SelectionState::from_parts(ids(&["D", "A"]), Some(id("A")), Some("Acme".into()));

        let roster = RosterExporter::confirm(&state, &catalog, &no_protected()).unwrap();

        let admin = roster.iter().find(|m| m.id == id("A")).unwrap();
        assert_eq!(admin.role, MemberRole::Admin);
        assert!(!admin.can_delete);
        let client = roster.iter().find(|m| m.id == id("D")).unwrap();
        assert_eq!(client.role, MemberRole::Regular);
        assert!(client.can_delete);
    }

    #[test]
    fn protected_ids_are_not_deletable() {
        let catalog = scenario_catalog();
        let state = SelectionState::from_parts(ids(&["A", "B"]), Some(id("A")), None);
        let protected: HashSet<MemberId> = ids(&["B"]).into_iter().collect();

        let roster = RosterExporter::confirm(&state, &catalog, &protected).unwrap();

        assert!(roster.iter().all(|m| !m.can_delete));
        assert_eq!(roster[1].role, MemberRole::Regular);
    }

    #[test]
    fn export_serializes_camel_case() {
        let catalog = scenario_catalog();
        let state = SelectionState::from_parts(ids(&["A"]), Some(id("A")), None);

        let roster = RosterExporter::confirm(&state, &catalog, &no_protected()).unwrap();
        let json = serde_json::to_value(&roster[0]).unwrap();

        assert_eq!(json["companyType"], "agency");
        assert_eq!(json["role"], "admin");
        assert_eq!(json["canDelete"], false);
    }
}
