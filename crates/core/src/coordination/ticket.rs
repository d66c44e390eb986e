// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Admission tickets
//!
//! Each stage of an access cycle is a value that the next operation
//! consumes: `request_* -> *Request -> begin_* -> *Access -> end_*`.
//! Dropping a ticket early runs the cleanup of the skipped stage, so an
//! aborted participant never leaves units held or stale records behind.

use super::AccessCoordinator;
use crate::participant::{ParticipantId, Role};
use tokio::sync::SemaphorePermit;

/// Entry in the waiting record, withdrawn on drop unless admitted
#[derive(Debug)]
pub(crate) struct Waiting<'a> {
    coordinator: &'a AccessCoordinator,
    participant: ParticipantId,
    role: Role,
    pending: bool,
}

impl<'a> Waiting<'a> {
    pub(crate) fn new(
        coordinator: &'a AccessCoordinator,
        participant: ParticipantId,
        role: Role,
    ) -> Self {
        Self {
            coordinator,
            participant,
            role,
            pending: true,
        }
    }

    pub(crate) fn coordinator(&self) -> &'a AccessCoordinator {
        self.coordinator
    }

    pub(crate) fn participant(&self) -> &ParticipantId {
        &self.participant
    }

    /// The matching begin already moved the entry out of the waiting record
    pub(crate) fn admitted(&mut self) {
        self.pending = false;
    }
}

impl Drop for Waiting<'_> {
    fn drop(&mut self) {
        if self.pending {
            self.coordinator.withdraw(&self.participant, self.role);
        }
    }
}

/// Admitted to read, not yet begun
#[must_use = "pass to begin_read; dropping withdraws the request"]
#[derive(Debug)]
pub struct ReadRequest<'a> {
    // Field order matters: the waiting entry is withdrawn before the unit returns
    waiting: Waiting<'a>,
    permit: SemaphorePermit<'a>,
}

impl<'a> ReadRequest<'a> {
    pub(crate) fn new(waiting: Waiting<'a>, permit: SemaphorePermit<'a>) -> Self {
        Self { waiting, permit }
    }

    pub(crate) fn into_parts(self) -> (Waiting<'a>, SemaphorePermit<'a>) {
        (self.waiting, self.permit)
    }

    pub fn participant(&self) -> &ParticipantId {
        self.waiting.participant()
    }
}

/// Admitted to write, not yet begun
#[must_use = "pass to begin_write; dropping withdraws the request"]
#[derive(Debug)]
pub struct WriteRequest<'a> {
    waiting: Waiting<'a>,
    permit: SemaphorePermit<'a>,
}

impl<'a> WriteRequest<'a> {
    pub(crate) fn new(waiting: Waiting<'a>, permit: SemaphorePermit<'a>) -> Self {
        Self { waiting, permit }
    }

    pub(crate) fn into_parts(self) -> (Waiting<'a>, SemaphorePermit<'a>) {
        (self.waiting, self.permit)
    }

    pub fn participant(&self) -> &ParticipantId {
        self.waiting.participant()
    }
}

/// An active reader holding one unit
#[must_use = "pass to end_read; dropping ends the read"]
#[derive(Debug)]
pub struct ReadAccess<'a> {
    coordinator: &'a AccessCoordinator,
    participant: ParticipantId,
    // Released after Drop::drop has left the bookkeeping lock
    _permit: SemaphorePermit<'a>,
}

impl<'a> ReadAccess<'a> {
    pub(crate) fn new(
        coordinator: &'a AccessCoordinator,
        participant: ParticipantId,
        permit: SemaphorePermit<'a>,
    ) -> Self {
        Self {
            coordinator,
            participant,
            _permit: permit,
        }
    }

    pub(crate) fn coordinator(&self) -> &'a AccessCoordinator {
        self.coordinator
    }

    pub fn participant(&self) -> &ParticipantId {
        &self.participant
    }
}

impl Drop for ReadAccess<'_> {
    fn drop(&mut self) {
        self.coordinator.finish_read(&self.participant);
    }
}

/// The exclusive writer holding every unit
#[must_use = "pass to end_write; dropping ends the write"]
#[derive(Debug)]
pub struct WriteAccess<'a> {
    coordinator: &'a AccessCoordinator,
    participant: ParticipantId,
    _permit: SemaphorePermit<'a>,
}

impl<'a> WriteAccess<'a> {
    pub(crate) fn new(
        coordinator: &'a AccessCoordinator,
        participant: ParticipantId,
        permit: SemaphorePermit<'a>,
    ) -> Self {
        Self {
            coordinator,
            participant,
            _permit: permit,
        }
    }

    pub(crate) fn coordinator(&self) -> &'a AccessCoordinator {
        self.coordinator
    }

    pub fn participant(&self) -> &ParticipantId {
        &self.participant
    }
}

impl Drop for WriteAccess<'_> {
    fn drop(&mut self) {
        self.coordinator.finish_write(&self.participant);
    }
}
