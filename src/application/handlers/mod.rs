//! Application handlers.
//!
//! Command handlers that orchestrate roster operations across ports.

pub mod roster;

pub use roster::{
    ConfirmRosterError, ConfirmRosterHandler, ConfirmRosterResult, OpenRosterSessionCommand,
    OpenRosterSessionHandler, OpenRosterSessionResult,
};
