// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transitions reported by the coordinator
//!
//! Events are emitted in bookkeeping order, so a consumer sees the same
//! sequence of waiting/reading states the coordinator went through.

use crate::participant::{ParticipantId, Role};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AccessEvent {
    /// Registered in the waiting record; `waiting` includes `participant`
    Requested {
        participant: ParticipantId,
        role: Role,
        waiting: Vec<ParticipantId>,
    },
    /// Moved into the active reader set; `reading` includes `participant`
    ReadStarted {
        participant: ParticipantId,
        reading: Vec<ParticipantId>,
    },
    ReadEnded {
        participant: ParticipantId,
    },
    WriteStarted {
        participant: ParticipantId,
    },
    WriteEnded {
        participant: ParticipantId,
    },
    /// Left the waiting record without beginning
    Cancelled {
        participant: ParticipantId,
        role: Role,
    },
}

impl AccessEvent {
    /// Event name in `category:action` form
    pub fn name(&self) -> &'static str {
        match self {
            AccessEvent::Requested { .. } => "access:requested",
            AccessEvent::ReadStarted { .. } => "read:started",
            AccessEvent::ReadEnded { .. } => "read:ended",
            AccessEvent::WriteStarted { .. } => "write:started",
            AccessEvent::WriteEnded { .. } => "write:ended",
            AccessEvent::Cancelled { .. } => "access:cancelled",
        }
    }

    pub fn participant(&self) -> &ParticipantId {
        match self {
            AccessEvent::Requested { participant, .. }
            | AccessEvent::ReadStarted { participant, .. }
            | AccessEvent::ReadEnded { participant }
            | AccessEvent::WriteStarted { participant }
            | AccessEvent::WriteEnded { participant }
            | AccessEvent::Cancelled { participant, .. } => participant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_event_tag() {
        let event = AccessEvent::Requested {
            participant: ParticipantId::new("r-1"),
            role: Role::Reader,
            waiting: vec![ParticipantId::new("w-1"), ParticipantId::new("r-1")],
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "requested");
        assert_eq!(json["role"], "reader");
        assert_eq!(json["waiting"], serde_json::json!(["w-1", "r-1"]));
    }

    #[test]
    fn names_follow_category_action() {
        let id = ParticipantId::new("x");
        assert_eq!(
            AccessEvent::ReadEnded { participant: id.clone() }.name(),
            "read:ended"
        );
        assert_eq!(
            AccessEvent::Cancelled {
                participant: id.clone(),
                role: Role::Writer
            }
            .participant(),
            &id
        );
    }
}
