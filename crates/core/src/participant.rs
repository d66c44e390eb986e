// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Readers and writers
//!
//! A participant is plain data: an identity, a role and its timing. The
//! execution loop in [`Participant::run`] is driven by whatever task the
//! caller spawns and stops when its [`CancelToken`] fires.

use crate::coordination::{AccessCoordinator, CancelToken};
use crate::error::Result;
use crate::timing::Timing;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Opaque participant identity
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Reader,
    Writer,
}

impl Role {
    /// Admission units a request of this role needs out of `capacity`
    pub fn units(self, capacity: u32) -> u32 {
        match self {
            Role::Reader => 1,
            Role::Writer => capacity,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Reader => write!(f, "Reader"),
            Role::Writer => write!(f, "Writer"),
        }
    }
}

/// A reader or writer with its configured timing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub role: Role,
    pub timing: Timing,
}

/// What a participant did before its loop stopped
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParticipantReport {
    pub id: ParticipantId,
    pub role: Role,
    /// Completed request/begin/end cycles
    pub cycles: u64,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>, role: Role, timing: Timing) -> Self {
        Self {
            id: id.into(),
            role,
            timing,
        }
    }

    /// A reader with the bare participant timing
    pub fn reader(id: impl Into<ParticipantId>) -> Self {
        Self::new(id, Role::Reader, Timing::default())
    }

    /// A writer with the bare participant timing
    pub fn writer(id: impl Into<ParticipantId>) -> Self {
        Self::new(id, Role::Writer, Timing::default())
    }

    /// Repeat request, begin, hold, end, idle until `cancel` fires.
    ///
    /// Cancellation while holding access ends the access before returning.
    pub async fn run(
        self,
        coordinator: Arc<AccessCoordinator>,
        cancel: CancelToken,
    ) -> ParticipantReport {
        info!(participant = %self.id, role = ?self.role, "participant started");
        let mut cycles = 0;

        while !cancel.is_cancelled() {
            match self.cycle(&coordinator, &cancel).await {
                Ok(true) => cycles += 1,
                Ok(false) => {
                    cycles += 1;
                    break;
                }
                Err(e) => {
                    debug!(participant = %self.id, error = %e, "participant stopping");
                    break;
                }
            }

            let idle = self.timing.idle.sample(&mut rand::rng());
            if !pause(idle, &cancel).await {
                break;
            }
        }

        info!(participant = %self.id, role = ?self.role, cycles, "participant stopped");
        ParticipantReport {
            id: self.id,
            role: self.role,
            cycles,
        }
    }

    /// One access cycle. `Ok(false)` means the hold was cut short by cancellation.
    async fn cycle(&self, coordinator: &AccessCoordinator, cancel: &CancelToken) -> Result<bool> {
        let hold = self.timing.active.sample(&mut rand::rng());
        match self.role {
            Role::Reader => {
                let request = coordinator.request_read(&self.id, cancel).await?;
                let access = coordinator.begin_read(request);
                let finished = pause(hold, cancel).await;
                coordinator.end_read(access);
                Ok(finished)
            }
            Role::Writer => {
                let request = coordinator.request_write(&self.id, cancel).await?;
                let access = coordinator.begin_write(request);
                let finished = pause(hold, cancel).await;
                coordinator.end_write(access);
                Ok(finished)
            }
        }
    }
}

/// Sleep for `duration`; false if cancelled first
async fn pause(duration: Duration, cancel: &CancelToken) -> bool {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        _ = tokio::time::sleep(duration) => true,
    }
}

#[cfg(test)]
#[path = "participant_tests.rs"]
mod tests;
