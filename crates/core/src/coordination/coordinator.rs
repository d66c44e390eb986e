// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fair readers/writers access coordinator
//!
//! Two mechanisms with separate jobs:
//! - **Admission pool**: a FIFO-fair counting semaphore of `capacity` units.
//!   Readers take one unit, writers take every unit in one indivisible
//!   request. It alone decides admission order, so a queued writer cannot be
//!   overtaken by readers that started waiting after it.
//! - **Bookkeeping lock**: a short-held mutex over the waiting record and the
//!   active reader set. Never held while waiting on the pool.

use super::snapshot::{CoordinatorStats, Counters, QueueSnapshot};
use super::ticket::{ReadAccess, ReadRequest, Waiting, WriteAccess, WriteRequest};
use super::CancelToken;
use crate::error::{Error, Result};
use crate::event::AccessEvent;
use crate::participant::{ParticipantId, Role};
use std::sync::{Mutex, MutexGuard};
use tokio::sync::{mpsc, Semaphore, SemaphorePermit};
use tracing::{debug, error, trace};

/// Default number of concurrent readers
pub const DEFAULT_CAPACITY: u32 = 5;

/// Waiting record and active reader set, guarded together
#[derive(Debug, Default)]
pub(crate) struct Bookkeeping {
    waiting: Vec<ParticipantId>,
    reading: Vec<ParticipantId>,
}

impl Bookkeeping {
    fn remove_waiting(&mut self, participant: &ParticipantId) -> bool {
        match self.waiting.iter().position(|p| p == participant) {
            Some(index) => {
                self.waiting.remove(index);
                true
            }
            None => false,
        }
    }

    fn remove_reading(&mut self, participant: &ParticipantId) -> bool {
        match self.reading.iter().position(|p| p == participant) {
            Some(index) => {
                self.reading.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Coordinates readers and writers over one shared library
#[derive(Debug)]
pub struct AccessCoordinator {
    capacity: u32,
    pool: Semaphore,
    books: Mutex<Bookkeeping>,
    counters: Counters,
    events: Option<mpsc::UnboundedSender<AccessEvent>>,
}

impl AccessCoordinator {
    /// Create a coordinator admitting up to `capacity` concurrent readers
    pub fn new(capacity: u32) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid("capacity must be at least 1"));
        }
        if capacity as usize > Semaphore::MAX_PERMITS {
            return Err(Error::invalid(format!(
                "capacity {} exceeds the maximum of {}",
                capacity,
                Semaphore::MAX_PERMITS
            )));
        }
        debug!(capacity, "AccessCoordinator::new");
        Ok(Self {
            capacity,
            // tokio's semaphore queues waiters FIFO regardless of how many permits each wants
            pool: Semaphore::new(capacity as usize),
            books: Mutex::new(Bookkeeping::default()),
            counters: Counters::default(),
            events: None,
        })
    }

    /// Report every transition on `events`
    pub fn with_events(mut self, events: mpsc::UnboundedSender<AccessEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Units currently free in the admission pool
    pub fn available_units(&self) -> usize {
        self.pool.available_permits()
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        let books = self.books();
        QueueSnapshot {
            waiting: books.waiting.clone(),
            reading: books.reading.clone(),
        }
    }

    pub fn stats(&self) -> CoordinatorStats {
        self.counters.snapshot()
    }

    /// Refuse all further admissions.
    ///
    /// Blocked and future requests fail with [`Error::Cancelled`]. Tickets
    /// already handed out stay valid.
    pub fn close(&self) {
        debug!("AccessCoordinator::close");
        self.pool.close();
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Register as waiting, then block for one unit
    pub async fn request_read(
        &self,
        participant: &ParticipantId,
        cancel: &CancelToken,
    ) -> Result<ReadRequest<'_>> {
        let waiting = self.enqueue(participant, Role::Reader);
        let permit = self.acquire(participant, Role::Reader, cancel).await?;
        Ok(ReadRequest::new(waiting, permit))
    }

    /// Move from the waiting record into the active reader set
    pub fn begin_read<'a>(&'a self, request: ReadRequest<'a>) -> ReadAccess<'a> {
        let (waiting, permit) = request.into_parts();
        let owner = waiting.coordinator();
        if !std::ptr::eq(owner, self) {
            error!(participant = %waiting.participant(), "read request begun on a coordinator that did not issue it");
        }
        owner.start_read(waiting, permit)
    }

    fn start_read<'a>(
        &'a self,
        mut waiting: Waiting<'a>,
        permit: SemaphorePermit<'a>,
    ) -> ReadAccess<'a> {
        let participant = waiting.participant().clone();
        {
            let mut books = self.books();
            if !books.remove_waiting(&participant) {
                error!(%participant, "reader began without a waiting entry");
            }
            books.reading.push(participant.clone());
            Counters::raise(&self.counters.peak_readers, books.reading.len());
            self.emit(AccessEvent::ReadStarted {
                participant: participant.clone(),
                reading: books.reading.clone(),
            });
        }
        waiting.admitted();
        Counters::bump(&self.counters.reads_started);
        debug!(%participant, "read started");
        ReadAccess::new(self, participant, permit)
    }

    /// Leave the active reader set and return the unit
    pub fn end_read(&self, access: ReadAccess<'_>) {
        if !std::ptr::eq(access.coordinator(), self) {
            error!(participant = %access.participant(), "read ended on a coordinator that did not admit it");
        }
        // Drop runs against the admitting coordinator
        drop(access);
    }

    /// Register as waiting, then block for every unit at once
    pub async fn request_write(
        &self,
        participant: &ParticipantId,
        cancel: &CancelToken,
    ) -> Result<WriteRequest<'_>> {
        let waiting = self.enqueue(participant, Role::Writer);
        let permit = self.acquire(participant, Role::Writer, cancel).await?;
        Ok(WriteRequest::new(waiting, permit))
    }

    /// Leave the waiting record; the writer now holds the library exclusively
    pub fn begin_write<'a>(&'a self, request: WriteRequest<'a>) -> WriteAccess<'a> {
        let (waiting, permit) = request.into_parts();
        let owner = waiting.coordinator();
        if !std::ptr::eq(owner, self) {
            error!(participant = %waiting.participant(), "write request begun on a coordinator that did not issue it");
        }
        owner.start_write(waiting, permit)
    }

    fn start_write<'a>(
        &'a self,
        mut waiting: Waiting<'a>,
        permit: SemaphorePermit<'a>,
    ) -> WriteAccess<'a> {
        let participant = waiting.participant().clone();
        {
            let mut books = self.books();
            if !books.remove_waiting(&participant) {
                error!(%participant, "writer began without a waiting entry");
            }
            if !books.reading.is_empty() {
                error!(%participant, readers = books.reading.len(), "writer admitted while readers are active");
            }
            self.emit(AccessEvent::WriteStarted {
                participant: participant.clone(),
            });
        }
        waiting.admitted();
        Counters::bump(&self.counters.writes_started);
        debug!(%participant, "write started");
        WriteAccess::new(self, participant, permit)
    }

    /// Return every unit in one release
    pub fn end_write(&self, access: WriteAccess<'_>) {
        if !std::ptr::eq(access.coordinator(), self) {
            error!(participant = %access.participant(), "write ended on a coordinator that did not admit it");
        }
        // Drop runs against the admitting coordinator
        drop(access);
    }

    fn enqueue(&self, participant: &ParticipantId, role: Role) -> Waiting<'_> {
        let mut books = self.books();
        books.waiting.push(participant.clone());
        Counters::raise(&self.counters.peak_waiting, books.waiting.len());
        // Snapshot before the lock is released so blocked requesters stay visible
        self.emit(AccessEvent::Requested {
            participant: participant.clone(),
            role,
            waiting: books.waiting.clone(),
        });
        drop(books);
        debug!(%participant, ?role, "access requested");
        Waiting::new(self, participant.clone(), role)
    }

    async fn acquire(
        &self,
        participant: &ParticipantId,
        role: Role,
        cancel: &CancelToken,
    ) -> Result<SemaphorePermit<'_>> {
        let units = role.units(self.capacity);
        let permit = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            // Dropping an unfinished acquire hands back any units it was partially granted
            acquired = self.pool.acquire_many(units) => acquired.ok(),
        };
        permit.ok_or_else(|| {
            debug!(%participant, units, "request cancelled");
            Error::Cancelled {
                participant: participant.clone(),
            }
        })
    }

    /// A waiting entry is being abandoned without a matching begin
    pub(crate) fn withdraw(&self, participant: &ParticipantId, role: Role) {
        let mut books = self.books();
        if !books.remove_waiting(participant) {
            error!(%participant, "withdrawn participant was not waiting");
        }
        self.emit(AccessEvent::Cancelled {
            participant: participant.clone(),
            role,
        });
        drop(books);
        Counters::bump(&self.counters.cancelled);
    }

    /// Bookkeeping half of ending a read; the unit goes back when the permit drops
    pub(crate) fn finish_read(&self, participant: &ParticipantId) {
        let mut books = self.books();
        if !books.remove_reading(participant) {
            error!(%participant, "ended read was not active");
        }
        self.emit(AccessEvent::ReadEnded {
            participant: participant.clone(),
        });
        drop(books);
        Counters::bump(&self.counters.reads_completed);
        debug!(%participant, "read ended");
    }

    /// Writers are not in the bookkeeping, so no lock is taken
    pub(crate) fn finish_write(&self, participant: &ParticipantId) {
        self.emit(AccessEvent::WriteEnded {
            participant: participant.clone(),
        });
        Counters::bump(&self.counters.writes_completed);
        debug!(%participant, "write ended");
    }

    fn books(&self) -> MutexGuard<'_, Bookkeeping> {
        self.books.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn emit(&self, event: AccessEvent) {
        trace!(event = event.name(), participant = %event.participant(), "emit");
        if let Some(tx) = &self.events {
            // A departed listener must not stall access
            let _ = tx.send(event);
        }
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
