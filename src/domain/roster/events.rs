//! Roster session events.
//!
//! Named in past tense. Returned to the caller by the session and the
//! application handlers for audit logging.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, ProjectId, Timestamp};

/// Something that happened to a roster session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RosterEvent {
    /// The dialog opened and the reconciler produced the opening selection.
    SessionOpened {
        project_id: ProjectId,
        member_count: usize,
        dropped_ids: Vec<MemberId>,
        occurred_at: Timestamp,
    },

    /// The roster passed the confirm gate and was exported.
    RosterConfirmed {
        project_id: ProjectId,
        member_ids: Vec<MemberId>,
        admin_id: Option<MemberId>,
        locked_client_company: Option<String>,
        occurred_at: Timestamp,
    },

    /// The dialog closed without exporting anything.
    SessionCancelled {
        project_id: ProjectId,
        occurred_at: Timestamp,
    },
}

impl RosterEvent {
    pub fn project_id(&self) -> ProjectId {
        match self {
            RosterEvent::SessionOpened { project_id, .. }
            | RosterEvent::RosterConfirmed { project_id, .. }
            | RosterEvent::SessionCancelled { project_id, .. } => *project_id,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            RosterEvent::SessionOpened { .. } => "roster.session_opened",
            RosterEvent::RosterConfirmed { .. } => "roster.confirmed",
            RosterEvent::SessionCancelled { .. } => "roster.session_cancelled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = RosterEvent::SessionCancelled {
            project_id: ProjectId::new(),
            occurred_at: Timestamp::now(),
        };

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "session_cancelled");
        assert_eq!(event.event_type(), "roster.session_cancelled");
    }

    #[test]
    fn project_id_is_available_on_every_variant() {
        let project_id = ProjectId::new();
        let event = RosterEvent::RosterConfirmed {
            project_id,
            member_ids: vec![],
            admin_id: None,
            locked_client_company: Some("Acme".into()),
            occurred_at: Timestamp::now(),
        };

        assert_eq!(event.project_id(), project_id);
    }
}
