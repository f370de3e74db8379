//! Project Roster - member selection engine for project rosters.
//!
//! Assembles a project's members from the agency and a single client
//! company, with one agency member designated as admin, and keeps the
//! selection consistent across toggles, group toggles, search, and
//! reopening.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
