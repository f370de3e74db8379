//! Roster-specific error and rejection types.
//!
//! None of these are fatal. A [`SelectionRejection`] explains why a toggle
//! was ignored, a [`ConfirmRejected`] explains why confirm is disabled, and
//! a [`RosterSessionError`] reports misuse of a session outside its open
//! phases.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId};

use super::SessionPhase;

/// Why the transition engine ignored a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionRejection {
    #[error("member '{0}' is not in the catalog")]
    UnknownMember(MemberId),

    #[error("client company '{company}' is not selectable while '{locked}' is locked")]
    ClientCompanyLocked { company: String, locked: String },

    #[error("member '{0}' is not an agency member and cannot be admin")]
    AdminMustBeAgency(MemberId),
}

/// Why a roster cannot be confirmed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfirmRejected {
    #[error("select at least one member")]
    EmptySelection,

    #[error("designate an agency member as admin")]
    AdminRequired,
}

/// Errors from driving a [`RosterSession`](super::RosterSession).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterSessionError {
    #[error("roster session is not open (phase: {phase:?})")]
    NotOpen { phase: SessionPhase },

    #[error("cannot move roster session from {from:?} to {to:?}")]
    InvalidTransition { from: SessionPhase, to: SessionPhase },

    #[error("confirm rejected: {0}")]
    Rejected(#[from] ConfirmRejected),
}

impl RosterSessionError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RosterSessionError::NotOpen { .. } => ErrorCode::SessionNotOpen,
            RosterSessionError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            RosterSessionError::Rejected(_) => ErrorCode::ConfirmRejected,
        }
    }
}

impl From<RosterSessionError> for DomainError {
    fn from(err: RosterSessionError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
