//! Catalog - the read-only directory of candidate members.
//!
//! Built once per session from a [`CatalogSource`](crate::ports::CatalogSource)
//! and never mutated afterwards. Filtering and grouping are pure and cheap
//! enough to rerun on every keystroke of the search box.

use std::collections::HashMap;

use crate::domain::foundation::{MemberId, ValidationError};

use super::{CompanyType, Member};

/// Immutable, ordered member directory with O(1) lookup by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    members: Vec<Member>,
    index: HashMap<MemberId, usize>,
}

/// Members of one company, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberGroup<'a> {
    pub company: &'a str,
    pub company_type: CompanyType,
    pub members: Vec<&'a Member>,
}

impl<'a> MemberGroup<'a> {
    pub fn member_ids(&self) -> impl Iterator<Item = &'a MemberId> + '_ {
        self.members.iter().map(|&m| &m.id)
    }
}

impl Catalog {
    /// Builds a catalog, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a member has a blank name or company,
    /// if two members share an id, or if one company name is listed as
    /// both agency and client.
    pub fn new(members: Vec<Member>) -> Result<Self, ValidationError> {
        let mut index = HashMap::with_capacity(members.len());
        let mut company_types: HashMap<&str, CompanyType> = HashMap::new();
        for (position, member) in members.iter().enumerate() {
            member.validate()?;
            if index.insert(member.id.clone(), position).is_some() {
                return Err(ValidationError::duplicate("member_id", member.id.as_str()));
            }
            let known = *company_types
                .entry(member.company.as_str())
                .or_insert(member.company_type);
            if known != member.company_type {
                return Err(ValidationError::invalid_format(
                    "company",
                    format!(
                        "'{}' is listed as both {} and {}",
                        member.company, known, member.company_type
                    ),
                ));
            }
        }
        Ok(Self { members, index })
    }

    pub fn get(&self, id: &MemberId) -> Option<&Member> {
        self.index.get(id).map(|&position| &self.members[position])
    }

    pub fn contains(&self, id: &MemberId) -> bool {
        self.index.contains_key(id)
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members on the given tab whose name or company contains `query`,
    /// ignoring case. An empty query matches the whole tab.
    pub fn filter(&self, tab: CompanyType, query: &str) -> Vec<&Member> {
        let needle = query.to_lowercase();
        self.members
            .iter()
            .filter(|m| m.company_type == tab && m.matches_query(&needle))
            .collect()
    }

    /// Every catalog member of `company`, in catalog order.
    pub fn members_of(&self, company: &str) -> Vec<&Member> {
        self.members.iter().filter(|m| m.company == company).collect()
    }

    /// Distinct company names of the given type, in order of first appearance.
    pub fn companies(&self, company_type: CompanyType) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for member in self.members.iter().filter(|m| m.company_type == company_type) {
            if !seen.contains(&member.company.as_str()) {
                seen.push(&member.company);
            }
        }
        seen
    }

    /// Groups members by company.
    ///
    /// Groups appear in order of their first member; members keep their
    /// relative order within a group.
    pub fn group_by_company<'a>(members: &[&'a Member]) -> Vec<MemberGroup<'a>> {
        let mut groups: Vec<MemberGroup<'a>> = Vec::new();
        for &member in members {
            match groups.iter_mut().find(|g| g.company == member.company) {
                Some(group) => group.members.push(member),
                None => groups.push(MemberGroup {
                    company: &member.company,
                    company_type: member.company_type,
                    members: vec![member],
                }),
            }
        }
        groups
    }
}
