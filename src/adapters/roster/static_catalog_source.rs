//! Static catalog source - members supplied up front.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::roster::Member;
use crate::ports::CatalogSource;

/// CatalogSource over a fixed member list.
///
/// Suits mock data and tests, where the directory is compiled in.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    members: Vec<Member>,
}

impl StaticCatalogSource {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_members(&self) -> Result<Vec<Member>, DomainError> {
        Ok(self.members.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, MemberId};
    use crate::domain::roster::CompanyType;

    fn member(id: &str) -> Member {
        Member::new(MemberId::new(id).unwrap(), "Kim", "DevCorp", CompanyType::Agency, "").unwrap()
    }

    #[tokio::test]
    async fn load_catalog_builds_catalog_in_order() {
        let source = StaticCatalogSource::new(vec![member("b"), member("a")]);

        let catalog = source.load_catalog().await.unwrap();

        assert_eq!(catalog.members()[0].id.as_str(), "b");
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn load_catalog_rejects_duplicates() {
        let source = StaticCatalogSource::new(vec![member("a"), member("a")]);

        let err = source.load_catalog().await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
