//! Catalog member entity and organization type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{MemberId, ValidationError};

/// Which side of the engagement a company sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyType {
    /// The fixed development-side organization.
    Agency,
    /// The customer-side organization. At most one per roster.
    Client,
}

impl CompanyType {
    pub fn is_client(&self) -> bool {
        matches!(self, CompanyType::Client)
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompanyType::Agency => write!(f, "agency"),
            CompanyType::Client => write!(f, "client"),
        }
    }
}

/// An immutable directory entry that can be picked into a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub company: String,
    pub company_type: CompanyType,
    /// Job title shown next to the name. Informational only.
    #[serde(default)]
    pub position: String,
}

impl Member {
    /// Creates a member, rejecting a blank name or company.
    pub fn new(
        id: MemberId,
        name: impl Into<String>,
        company: impl Into<String>,
        company_type: CompanyType,
        position: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let member = Self {
            id,
            name: name.into(),
            company: company.into(),
            company_type,
            position: position.into(),
        };
        member.validate()?;
        Ok(member)
    }

    /// Checks the fields deserialization cannot check on its own.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.company.trim().is_empty() {
            return Err(ValidationError::empty_field("company"));
        }
        Ok(())
    }

    pub fn is_client(&self) -> bool {
        self.company_type.is_client()
    }

    pub fn is_agency(&self) -> bool {
        !self.is_client()
    }

    /// Case-insensitive substring match on name or company.
    ///
    /// `needle` must already be lowercased; an empty needle matches everything.
    pub(crate) fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.company.to_lowercase().contains(needle)
    }
}
