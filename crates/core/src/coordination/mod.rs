// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Access coordination between readers and writers
//!
//! This module provides:
//! - **AccessCoordinator** - FIFO-fair admission with bounded readers and exclusive writers
//! - **Tickets** - typed stages of a request/begin/end cycle
//! - **CancelSource/CancelToken** - cancellation for blocked requests and participant loops
//! - **QueueSnapshot/CoordinatorStats** - diagnostics

pub mod cancel;
pub mod coordinator;
pub mod snapshot;
pub mod ticket;

pub use cancel::{CancelSource, CancelToken};
pub use coordinator::{AccessCoordinator, DEFAULT_CAPACITY};
pub use snapshot::{join_ids, CoordinatorStats, QueueSnapshot};
pub use ticket::{ReadAccess, ReadRequest, WriteAccess, WriteRequest};
