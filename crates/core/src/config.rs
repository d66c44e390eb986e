// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation configuration
//!
//! Loaded from TOML. Every section is optional and falls back to the
//! factory defaults:
//!
//! ```toml
//! capacity = 5
//!
//! [readers.active]
//! min = "1s"
//! max = "3s"
//!
//! [writers.idle]
//! min = "3s"
//! max = "10s"
//! ```

use crate::coordination::{AccessCoordinator, DEFAULT_CAPACITY};
use crate::error::{Error, Result};
use crate::timing::{DurationRange, Timing};
use serde::Deserialize;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub capacity: u32,
    pub readers: Timing,
    pub writers: Timing,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            readers: Timing::reader_default(),
            writers: Timing::default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    capacity: Option<u32>,
    #[serde(default)]
    readers: RawTiming,
    #[serde(default)]
    writers: RawTiming,
}

#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTiming {
    active: Option<DurationRange>,
    idle: Option<DurationRange>,
}

impl RawTiming {
    fn or(self, fallback: Timing) -> Timing {
        Timing {
            active: self.active.unwrap_or(fallback.active),
            idle: self.idle.unwrap_or(fallback.idle),
        }
    }
}

impl SimulationConfig {
    /// Parse and validate TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)?;
        let defaults = Self::default();
        let config = Self {
            capacity: raw.capacity.unwrap_or(defaults.capacity),
            readers: raw.readers.or(defaults.readers),
            writers: raw.writers.or(defaults.writers),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::invalid(format!("cannot read {}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::invalid("capacity must be at least 1"));
        }
        Ok(())
    }

    /// Build the coordinator this configuration describes
    pub fn coordinator(&self) -> Result<AccessCoordinator> {
        AccessCoordinator::new(self.capacity)
    }
}
