//! Application layer - Commands and Handlers.
//!
//! This layer drives the roster domain and coordinates between ports.

pub mod handlers;

pub use handlers::{
    ConfirmRosterError, ConfirmRosterHandler, ConfirmRosterResult, OpenRosterSessionCommand,
    OpenRosterSessionHandler, OpenRosterSessionResult,
};
