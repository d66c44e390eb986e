// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rwlib-core: fair readers/writers coordination for a shared library
//!
//! This crate provides:
//! - The access coordinator: bounded concurrent readers, exclusive writers,
//!   FIFO admission so writers are never starved
//! - Participants (readers and writers) with their execution loop
//! - Factories, identity generation and timing configuration

pub mod config;
pub mod coordination;
pub mod error;
pub mod event;
pub mod factory;
pub mod id;
pub mod participant;
pub mod timing;

// Re-exports
pub use config::SimulationConfig;
pub use coordination::{
    AccessCoordinator, CancelSource, CancelToken, CoordinatorStats, QueueSnapshot, ReadAccess,
    ReadRequest, WriteAccess, WriteRequest, DEFAULT_CAPACITY,
};
pub use error::{Error, Result};
pub use event::AccessEvent;
pub use factory::ParticipantFactory;
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use participant::{Participant, ParticipantId, ParticipantReport, Role};
pub use timing::{DurationRange, Timing};
