// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Active/idle timing for participants
//!
//! Ranges are inclusive and sampled uniformly at full `Duration` precision.

use crate::error::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Inclusive `[min, max]` duration range
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct DurationRange {
    min: Duration,
    max: Duration,
}

#[derive(Serialize, Deserialize)]
struct RawRange {
    #[serde(with = "humantime_serde")]
    min: Duration,
    #[serde(with = "humantime_serde")]
    max: Duration,
}

impl TryFrom<RawRange> for DurationRange {
    type Error = Error;

    fn try_from(raw: RawRange) -> Result<Self> {
        DurationRange::new(raw.min, raw.max)
    }
}

impl From<DurationRange> for RawRange {
    fn from(range: DurationRange) -> Self {
        RawRange {
            min: range.min,
            max: range.max,
        }
    }
}

impl DurationRange {
    pub fn new(min: Duration, max: Duration) -> Result<Self> {
        if min > max {
            return Err(Error::invalid(format!(
                "minimum {} exceeds maximum {}",
                humantime::format_duration(min),
                humantime::format_duration(max),
            )));
        }
        Ok(Self { min, max })
    }

    pub fn from_millis(min: u64, max: u64) -> Result<Self> {
        Self::new(Duration::from_millis(min), Duration::from_millis(max))
    }

    /// A range that always yields `duration`
    pub fn fixed(duration: Duration) -> Self {
        Self {
            min: duration,
            max: duration,
        }
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Draw a duration uniformly from the range, both ends included
    pub fn sample(&self, rng: &mut impl Rng) -> Duration {
        if self.min >= self.max {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }
}

/// How long a participant holds access and how long it idles between cycles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    pub active: DurationRange,
    pub idle: DurationRange,
}

impl Timing {
    pub fn new(active: DurationRange, idle: DurationRange) -> Self {
        Self { active, idle }
    }

    /// Build from raw millisecond bounds, validating both ranges
    pub fn from_millis(
        min_active: u64,
        max_active: u64,
        min_idle: u64,
        max_idle: u64,
    ) -> Result<Self> {
        Ok(Self {
            active: DurationRange::from_millis(min_active, max_active)?,
            idle: DurationRange::from_millis(min_idle, max_idle)?,
        })
    }

    /// Readers idle for less time than the participant default
    pub fn reader_default() -> Self {
        Self {
            active: ACTIVE_DEFAULT,
            idle: DurationRange {
                min: Duration::from_millis(1_000),
                max: Duration::from_millis(5_000),
            },
        }
    }

    /// Zero-length holds and idles, for tests
    pub fn instant() -> Self {
        Self {
            active: DurationRange::fixed(Duration::ZERO),
            idle: DurationRange::fixed(Duration::ZERO),
        }
    }
}

const ACTIVE_DEFAULT: DurationRange = DurationRange {
    min: Duration::from_millis(1_000),
    max: Duration::from_millis(3_000),
};

impl Default for Timing {
    fn default() -> Self {
        Self {
            active: ACTIVE_DEFAULT,
            idle: DurationRange {
                min: Duration::from_millis(3_000),
                max: Duration::from_millis(10_000),
            },
        }
    }
}

#[cfg(test)]
#[path = "timing_tests.rs"]
mod tests;
