// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Participant factories
//!
//! A factory stamps out readers or writers with one timing configuration and
//! a fresh identity each, and remembers everything it built.

use crate::id::{IdGen, UuidIdGen};
use crate::participant::{Participant, Role};
use crate::timing::Timing;

#[derive(Clone, Debug)]
pub struct ParticipantFactory<G: IdGen = UuidIdGen> {
    role: Role,
    timing: Timing,
    id_gen: G,
    created: Vec<Participant>,
}

impl ParticipantFactory<UuidIdGen> {
    /// Readers active 1-3s and idle 1-5s
    pub fn readers() -> Self {
        Self::new(Role::Reader, Timing::reader_default(), UuidIdGen)
    }

    /// Writers active 1-3s and idle 3-10s
    pub fn writers() -> Self {
        Self::new(Role::Writer, Timing::default(), UuidIdGen)
    }
}

impl<G: IdGen> ParticipantFactory<G> {
    pub fn new(role: Role, timing: Timing, id_gen: G) -> Self {
        Self {
            role,
            timing,
            id_gen,
            created: Vec::new(),
        }
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_id_gen<H: IdGen>(self, id_gen: H) -> ParticipantFactory<H> {
        ParticipantFactory {
            role: self.role,
            timing: self.timing,
            id_gen,
            created: self.created,
        }
    }

    /// Build a participant with a new identity
    pub fn create(&mut self) -> Participant {
        let participant = Participant::new(self.id_gen.next_id(self.role), self.role, self.timing);
        self.created.push(participant.clone());
        participant
    }

    /// Everything built so far, oldest first
    pub fn created(&self) -> &[Participant] {
        &self.created
    }
}
