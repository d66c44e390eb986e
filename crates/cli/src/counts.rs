// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lenient participant counts
//!
//! A count that does not parse falls back to its default with a warning
//! instead of failing the run.

pub const DEFAULT_READERS: usize = 10;
pub const DEFAULT_WRITERS: usize = 3;

/// A resolved count and the warning to show if the input was rejected
#[derive(Debug, PartialEq, Eq)]
pub struct Count {
    pub value: usize,
    pub warning: Option<String>,
}

pub fn resolve(raw: Option<&str>, what: &str, default: usize) -> Count {
    match raw.map(|s| s.trim().parse::<usize>()) {
        None => Count {
            value: default,
            warning: None,
        },
        Some(Ok(value)) => Count {
            value,
            warning: None,
        },
        Some(Err(_)) => Count {
            value: default,
            warning: Some(format!(
                "Invalid number of {what}, using default value: {default}"
            )),
        },
    }
}
