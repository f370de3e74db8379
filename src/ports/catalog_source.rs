//! CatalogSource port - where the member directory comes from.
//!
//! The roster engine never talks to a directory service itself. The
//! embedding page hands it a source, the open handler loads it once, and
//! the resulting [`Catalog`] stays immutable for the session.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::roster::{Catalog, Member};

/// Port for loading candidate members.
///
/// # Example
///
/// ```ignore
/// let catalog = source.load_catalog().await?;
/// let session = RosterSession::new(project_id, Arc::new(catalog));
/// ```
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every candidate member, in display order.
    async fn fetch_members(&self) -> Result<Vec<Member>, DomainError>;

    /// Fetch members and build a validated catalog.
    ///
    /// # Errors
    ///
    /// Propagates fetch failures, and returns a validation error if the
    /// members contain duplicates or blank fields.
    async fn load_catalog(&self) -> Result<Catalog, DomainError> {
        let members = self.fetch_members().await?;
        Ok(Catalog::new(members)?)
    }
}

