// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rwlib - readers and writers sharing a library

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod counts;
mod logging;
mod output;
mod simulation;

use anyhow::Result;
use clap::Parser;
use rwlib_core::SimulationConfig;
use std::path::PathBuf;
use std::time::Duration;

use crate::counts::{DEFAULT_READERS, DEFAULT_WRITERS};
use crate::output::OutputFormat;
use crate::simulation::Plan;

#[derive(Parser, Debug)]
#[command(
    name = "rwlib",
    version,
    about = "Readers and writers sharing a library, admitted fairly"
)]
struct Cli {
    /// Number of readers (invalid values fall back to 10)
    #[arg(allow_hyphen_values = true)]
    readers: Option<String>,

    /// Number of writers (invalid values fall back to 3)
    #[arg(allow_hyphen_values = true)]
    writers: Option<String>,

    /// TOML file with capacity and participant timing
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum concurrent readers (overrides the config file)
    #[arg(long)]
    capacity: Option<u32>,

    /// Stop after this long, e.g. "30s" (default: run until Ctrl-C)
    #[arg(long, value_parser = humantime::parse_duration)]
    run_for: Option<Duration>,

    /// Event output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.log_file.as_deref())?;

    let readers = counts::resolve(cli.readers.as_deref(), "readers", DEFAULT_READERS);
    let writers = counts::resolve(cli.writers.as_deref(), "writers", DEFAULT_WRITERS);
    for warning in [&readers.warning, &writers.warning].into_iter().flatten() {
        eprintln!("{}", warning);
    }

    let mut config = match &cli.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(capacity) = cli.capacity {
        config = config.with_capacity(capacity);
    }
    config.validate()?;

    let plan = Plan {
        config,
        readers: readers.value,
        writers: writers.value,
        run_for: cli.run_for,
        format: cli.format,
    };
    let summary = simulation::run(plan, simulation::ctrl_c()).await?;
    output::print(&summary, cli.format);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_counts_reach_the_lenient_parser() {
        let cli = Cli::try_parse_from(["rwlib", "-4", "2"]).unwrap();
        assert_eq!(cli.readers.as_deref(), Some("-4"));
        assert_eq!(cli.writers.as_deref(), Some("2"));
    }

    #[test]
    fn run_for_accepts_humantime() {
        let cli = Cli::try_parse_from(["rwlib", "--run-for", "1m 30s"]).unwrap();
        assert_eq!(cli.run_for, Some(Duration::from_secs(90)));
        assert_eq!(cli.format, OutputFormat::Text);
    }
}
