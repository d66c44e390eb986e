// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only views of coordinator state for diagnostics

use crate::participant::ParticipantId;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Waiting record and active readers at one instant
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QueueSnapshot {
    /// Requested but not yet begun, in request order
    pub waiting: Vec<ParticipantId>,
    /// Currently reading, in the order they began
    pub reading: Vec<ParticipantId>,
}

impl std::fmt::Display for QueueSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "waiting: [{}] reading: [{}]",
            join_ids(&self.waiting),
            join_ids(&self.reading)
        )
    }
}

/// Render identities as `a, b, c`
pub fn join_ids(ids: &[ParticipantId]) -> String {
    ids.iter()
        .map(ParticipantId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Counters reported by [`super::AccessCoordinator::stats`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CoordinatorStats {
    pub reads_started: u64,
    pub reads_completed: u64,
    pub writes_started: u64,
    pub writes_completed: u64,
    /// Requests that left the waiting record without beginning
    pub cancelled: u64,
    pub peak_readers: u64,
    pub peak_waiting: u64,
}

impl std::fmt::Display for CoordinatorStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "reads {}/{} writes {}/{} cancelled {} peak readers {} peak waiting {}",
            self.reads_completed,
            self.reads_started,
            self.writes_completed,
            self.writes_started,
            self.cancelled,
            self.peak_readers,
            self.peak_waiting
        )
    }
}

/// Lock-free counters so that ending a write never touches the bookkeeping lock
#[derive(Debug, Default)]
pub(crate) struct Counters {
    pub reads_started: AtomicU64,
    pub reads_completed: AtomicU64,
    pub writes_started: AtomicU64,
    pub writes_completed: AtomicU64,
    pub cancelled: AtomicU64,
    pub peak_readers: AtomicU64,
    pub peak_waiting: AtomicU64,
}

impl Counters {
    pub fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn raise(counter: &AtomicU64, value: usize) {
        counter.fetch_max(value as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CoordinatorStats {
        let load = |c: &AtomicU64| c.load(Ordering::Relaxed);
        CoordinatorStats {
            reads_started: load(&self.reads_started),
            reads_completed: load(&self.reads_completed),
            writes_started: load(&self.writes_started),
            writes_completed: load(&self.writes_completed),
            cancelled: load(&self.cancelled),
            peak_readers: load(&self.peak_readers),
            peak_waiting: load(&self.peak_waiting),
        }
    }
}
