//! Group Aggregator - read-side projections over a selection.
//!
//! Nothing here mutates state. The UI asks these functions which boxes
//! are checked, which company headers show an indeterminate mark, and
//! which client companies are disabled, then feeds user clicks back
//! through the transition engine.

use serde::Serialize;

use crate::domain::foundation::MemberId;

use super::{Catalog, CompanyType, Member, SelectionState};

/// Tri-state of a company checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySelection {
    All,
    Partial,
    None,
}

/// One member row as the dialog renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRowView {
    pub id: MemberId,
    pub name: String,
    pub position: String,
    pub checked: bool,
    pub disabled: bool,
    pub is_admin: bool,
}

/// One company group as the dialog renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyGroupView {
    pub company: String,
    pub company_type: CompanyType,
    pub selection: CompanySelection,
    pub selectable: bool,
    pub members: Vec<MemberRowView>,
}

/// Tri-state and selectability projections.
pub struct GroupAggregator;

impl GroupAggregator {
    /// ALL when every listed member of `company` is selected, NONE when
    /// none are, PARTIAL otherwise.
    ///
    /// Members of other companies in `members` are ignored. A company with
    /// no listed members reports NONE.
    pub fn company_selection_state(
        company: &str,
        members: &[&Member],
        state: &SelectionState,
    ) -> CompanySelection {
        let mut total = 0usize;
        let mut selected = 0usize;
        for member in members.iter().filter(|m| m.company == company) {
            total += 1;
            if state.is_selected(&member.id) {
                selected += 1;
            }
        }

        match (selected, total) {
            (0, _) => CompanySelection::None,
            (s, t) if s == t => CompanySelection::All,
            _ => CompanySelection::Partial,
        }
    }

    /// Agency companies are always selectable. A client company is
    /// selectable while no client company is locked, or when it is the
    /// locked one.
    pub fn is_company_selectable(
        company: &str,
        company_type: CompanyType,
        locked_client_company: Option<&str>,
    ) -> bool {
        match company_type {
            CompanyType::Agency => true,
            CompanyType::Client => locked_client_company.map_or(true, |locked| locked == company),
        }
    }

    /// Builds the grouped, filtered view for one tab.
    ///
    /// The tri-state of each group is computed over the members that survive
    /// the search filter, since the group checkbox toggles what is visible.
    pub fn project(
        catalog: &Catalog,
        tab: CompanyType,
        query: &str,
        state: &SelectionState,
    ) -> Vec<CompanyGroupView> {
        let visible = catalog.filter(tab, query);
        Catalog::group_by_company(&visible)
            .into_iter()
            .map(|group| {
                let selectable = Self::is_company_selectable(
                    group.company,
                    group.company_type,
                    state.locked_client_company(),
                );
                CompanyGroupView {
                    company: group.company.to_string(),
                    company_type: group.company_type,
                    selection: Self::company_selection_state(group.company, &group.members, state),
                    selectable,
                    members: group
                        .members
                        .iter()
                        .map(|m| MemberRowView {
                            id: m.id.clone(),
                            name: m.name.clone(),
                            position: m.position.clone(),
                            checked: state.is_selected(&m.id),
                            disabled: !selectable,
                            is_admin: state.is_admin(&m.id),
                        })
                        .collect(),
                }
            })
            .collect()
    }
}
