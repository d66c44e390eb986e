// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Participant naming
//!
//! Factories ask an [`IdGen`] for a name each time they build a participant.
//! The binary uses random UUIDs; [`SequentialIdGen`] numbers readers and
//! writers separately (`reader-1`, `writer-1`, ...) so tests can predict them.

use crate::participant::{ParticipantId, Role};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub trait IdGen: Clone + Send + Sync {
    /// A name no other participant built from this generator has
    fn next_id(&self, role: Role) -> ParticipantId;
}

#[derive(Clone, Debug, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next_id(&self, _role: Role) -> ParticipantId {
        ParticipantId::from(uuid::Uuid::new_v4().to_string())
    }
}

/// Per-role counters, shared between clones
#[derive(Clone, Debug, Default)]
pub struct SequentialIdGen {
    issued: Arc<[AtomicU64; 2]>,
}

impl SequentialIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many names have been handed out for `role`
    pub fn issued(&self, role: Role) -> u64 {
        self.counter(role).load(Ordering::Relaxed)
    }

    fn counter(&self, role: Role) -> &AtomicU64 {
        match role {
            Role::Reader => &self.issued[0],
            Role::Writer => &self.issued[1],
        }
    }
}

impl IdGen for SequentialIdGen {
    fn next_id(&self, role: Role) -> ParticipantId {
        let n = self.counter(role).fetch_add(1, Ordering::Relaxed) + 1;
        let label = match role {
            Role::Reader => "reader",
            Role::Writer => "writer",
        };
        ParticipantId::from(format!("{label}-{n}"))
    }
}
