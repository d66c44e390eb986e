// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run readers and writers against one shared coordinator

use crate::output::{self, EventLine, OutputFormat, Summary};
use anyhow::Result;
use rwlib_core::{
    AccessCoordinator, AccessEvent, CancelSource, ParticipantFactory, ParticipantReport,
    SimulationConfig,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

/// Everything one run needs
#[derive(Debug, Clone)]
pub struct Plan {
    pub config: SimulationConfig,
    pub readers: usize,
    pub writers: usize,
    /// Stop after this long; otherwise run until interrupted
    pub run_for: Option<Duration>,
    pub format: OutputFormat,
}

/// Spawn every participant, wait for `stop`, then wind everything down
pub async fn run(plan: Plan, stop: impl Future<Output = Result<()>>) -> Result<Summary> {
    let (tx, rx) = mpsc::unbounded_channel();
    let coordinator = Arc::new(plan.config.coordinator()?.with_events(tx));
    let printer = tokio::spawn(print_events(rx, plan.format));

    info!(
        capacity = coordinator.capacity(),
        readers = plan.readers,
        writers = plan.writers,
        "starting library"
    );

    let source = CancelSource::new();
    let mut readers = ParticipantFactory::readers().with_timing(plan.config.readers);
    let mut writers = ParticipantFactory::writers().with_timing(plan.config.writers);

    let mut handles: Vec<JoinHandle<ParticipantReport>> = Vec::new();
    for _ in 0..plan.readers {
        let reader = readers.create();
        handles.push(tokio::spawn(reader.run(Arc::clone(&coordinator), source.token())));
    }
    for _ in 0..plan.writers {
        let writer = writers.create();
        handles.push(tokio::spawn(writer.run(Arc::clone(&coordinator), source.token())));
    }

    let stopped = match plan.run_for {
        Some(limit) => tokio::select! {
            _ = tokio::time::sleep(limit) => Ok(()),
            result = stop => result,
        },
        None => stop.await,
    };

    info!("shutting down library");
    source.cancel();
    coordinator.close();

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        reports.push(handle.await?);
    }
    let summary = Summary::new(reports, coordinator.stats());

    // Last sender goes with the coordinator, which lets the printer drain and exit
    drop(coordinator);
    printer.await?;
    stopped?;

    Ok(summary)
}

/// Shutdown signal used by the binary
pub async fn ctrl_c() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    info!("received interrupt");
    Ok(())
}

async fn print_events(mut rx: mpsc::UnboundedReceiver<AccessEvent>, format: OutputFormat) {
    while let Some(event) = rx.recv().await {
        output::print(&EventLine(&event), format);
    }
}

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod tests;
