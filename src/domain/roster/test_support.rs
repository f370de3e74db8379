//! Shared fixtures for roster unit tests.

use proptest::prelude::*;

use crate::domain::foundation::MemberId;

use super::{Catalog, CompanyType, Member, SelectionState, TransitionEngine};

pub(crate) fn id(raw: &str) -> MemberId {
    MemberId::new(raw).unwrap()
}

pub(crate) fn member(raw_id: &str, name: &str, company: &str, company_type: CompanyType) -> Member {
    Member::new(id(raw_id), name, company, company_type, "").unwrap()
}

/// Agency A, B, C at DevCorp; clients D, E at Acme and F at Beta.
pub(crate) fn scenario_catalog() -> Catalog {
    Catalog::new(vec![
        member("A", "Alice", "DevCorp", CompanyType::Agency),
        member("B", "Bob", "DevCorp", CompanyType::Agency),
        member("C", "Carol", "DevCorp", CompanyType::Agency),
        member("D", "Dave", "Acme", CompanyType::Client),
        member("E", "Erin", "Acme", CompanyType::Client),
        member("F", "Frank", "Beta", CompanyType::Client),
    ])
    .unwrap()
}

pub(crate) fn ids(raw: &[&str]) -> Vec<MemberId> {
    raw.iter().map(|r| id(r)).collect()
}

/// Scenario ids plus one the catalog does not know.
pub(crate) const MEMBER_IDS: [&str; 7] = ["A", "B", "C", "D", "E", "F", "Z"];
pub(crate) const COMPANIES: [&str; 3] = ["DevCorp", "Acme", "Beta"];

/// One UI event against the scenario catalog.
#[derive(Debug, Clone)]
pub(crate) enum Op {
    Select(usize),
    Deselect(usize),
    ToggleCompany(usize),
    SetAdmin(usize),
}

pub(crate) fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..MEMBER_IDS.len()).prop_map(Op::Select),
        (0..MEMBER_IDS.len()).prop_map(Op::Deselect),
        (0..COMPANIES.len()).prop_map(Op::ToggleCompany),
        (0..MEMBER_IDS.len()).prop_map(Op::SetAdmin),
    ]
}

pub(crate) fn apply_op(
    engine: &TransitionEngine<'_>,
    catalog: &Catalog,
    state: &mut SelectionState,
    op: &Op,
) {
    match op {
        Op::Select(i) => {
            engine.select_member(state, &id(MEMBER_IDS[*i]));
        }
        Op::Deselect(i) => {
            engine.deselect_member(state, &id(MEMBER_IDS[*i]));
        }
        Op::ToggleCompany(i) => {
            let company = COMPANIES[*i];
            engine.toggle_company_all(state, company, &catalog.members_of(company));
        }
        Op::SetAdmin(i) => {
            engine.set_admin(state, &id(MEMBER_IDS[*i]));
        }
    }
}
