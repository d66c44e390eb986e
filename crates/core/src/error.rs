// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the library coordinator

use crate::participant::ParticipantId;
use thiserror::Error;

/// Errors surfaced by the coordinator and its configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rejected at construction or load time, never mid-run
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A blocked request was cancelled before it was admitted
    #[error("request by {participant} was cancelled")]
    Cancelled { participant: ParticipantId },
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration(message.into())
    }

    /// True when the participant loop should stop rather than retry
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::InvalidConfiguration(format!("TOML parse error: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
