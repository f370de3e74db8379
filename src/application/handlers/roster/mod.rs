//! Roster handlers.
//!
//! ## Commands
//! - Opening the member picker for a project
//! - Confirming the picked roster

mod confirm_roster;
mod open_roster_session;

pub use confirm_roster::{ConfirmRosterError, ConfirmRosterHandler, ConfirmRosterResult};
pub use open_roster_session::{
    OpenRosterSessionCommand, OpenRosterSessionHandler, OpenRosterSessionResult,
};
