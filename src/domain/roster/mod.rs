//! Roster domain module.
//!
//! Picks a project's members from the agency and at most one client
//! company, and designates one agency member as admin.
//!
//! # Module Structure
//!
//! - `member` - Catalog entry and company type
//! - `catalog` - Immutable member directory, filtering and grouping
//! - `selection` - Mutable selection state and its invariant check
//! - `aggregator` - Tri-state and selectability projections
//! - `transitions` - The only writer of selection state
//! - `reconciler` - Opening state from caller-supplied roster
//! - `exporter` - Confirm gate and roster export
//! - `session` - Open/interact/confirm/cancel lifecycle

mod aggregator;
mod catalog;
mod errors;
mod events;
mod exporter;
mod member;
mod reconciler;
mod selection;
mod session;
mod transitions;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregator::{CompanyGroupView, CompanySelection, GroupAggregator, MemberRowView};
pub use catalog::{Catalog, MemberGroup};
pub use errors::{ConfirmRejected, RosterSessionError, SelectionRejection};
pub use events::RosterEvent;
pub use exporter::{MemberRole, RosterExporter, SelectedMember};
pub use member::{CompanyType, Member};
pub use reconciler::{ReconcileInput, Reconciled, Reconciler};
pub use selection::SelectionState;
pub use session::{ConfirmedRoster, RosterSession, SessionPhase};
pub use transitions::{TransitionEngine, TransitionOutcome};
