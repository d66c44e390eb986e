// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for coordinator events and the run summary

use clap::ValueEnum;
use rwlib_core::coordination::join_ids;
use rwlib_core::{AccessEvent, CoordinatorStats, ParticipantReport, Role};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print one value per line in the specified format
pub fn print<T: Serialize + fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string(value) {
                println!("{}", json);
            }
        }
    }
}

/// Console view of an event
#[derive(Serialize)]
#[serde(transparent)]
pub struct EventLine<'a>(pub &'a AccessEvent);

impl fmt::Display for EventLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            AccessEvent::Requested {
                participant,
                role,
                waiting,
            } => {
                writeln!(f, "{} {} requested access...", role, participant)?;
                write!(f, "People currently awaiting: {}", join_ids(waiting))
            }
            AccessEvent::ReadStarted {
                participant,
                reading,
            } => {
                writeln!(f, "Reader {} started reading...", participant)?;
                write!(f, "Readers currently reading: {}", join_ids(reading))
            }
            AccessEvent::ReadEnded { participant } => {
                write!(f, "Reader {} stopped reading.", participant)
            }
            AccessEvent::WriteStarted { participant } => {
                write!(f, "Writer {} started writing...", participant)
            }
            AccessEvent::WriteEnded { participant } => {
                write!(f, "Writer {} stopped writing...", participant)
            }
            AccessEvent::Cancelled { participant, role } => {
                write!(f, "{} {} left the queue.", role, participant)
            }
        }
    }
}

/// What the run achieved, printed on shutdown
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename = "summary")]
pub struct Summary {
    pub reader_cycles: u64,
    pub writer_cycles: u64,
    pub participants: Vec<ParticipantReport>,
    pub stats: CoordinatorStats,
}

impl Summary {
    pub fn new(participants: Vec<ParticipantReport>, stats: CoordinatorStats) -> Self {
        let cycles = |role: Role| -> u64 {
            participants
                .iter()
                .filter(|p| p.role == role)
                .map(|p| p.cycles)
                .sum()
        };
        Self {
            reader_cycles: cycles(Role::Reader),
            writer_cycles: cycles(Role::Writer),
            participants,
            stats,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Finished: {} participants, {} reader cycles, {} writer cycles",
            self.participants.len(),
            self.reader_cycles,
            self.writer_cycles
        )?;
        write!(f, "Coordinator: {}", self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rwlib_core::ParticipantId;

    fn id(s: &str) -> ParticipantId {
        ParticipantId::new(s)
    }

    #[test]
    fn request_lists_everyone_waiting() {
        let event = AccessEvent::Requested {
            participant: id("b"),
            role: Role::Writer,
            waiting: vec![id("a"), id("b")],
        };
        assert_eq!(
            EventLine(&event).to_string(),
            "Writer b requested access...\nPeople currently awaiting: a, b"
        );
    }

    #[test]
    fn read_start_lists_active_readers() {
        let event = AccessEvent::ReadStarted {
            participant: id("c"),
            reading: vec![id("a"), id("c")],
        };
        assert_eq!(
            EventLine(&event).to_string(),
            "Reader c started reading...\nReaders currently reading: a, c"
        );
    }

    #[test]
    fn event_json_is_the_core_shape() {
        let event = AccessEvent::WriteEnded {
            participant: id("w"),
        };
        let json = serde_json::to_value(EventLine(&event)).unwrap();
        assert_eq!(json["event"], "write_ended");
        assert_eq!(json["participant"], "w");
    }

    #[test]
    fn summary_totals_cycles_by_role() {
        let participants = vec![
            ParticipantReport {
                id: id("r-1"),
                role: Role::Reader,
                cycles: 4,
            },
            ParticipantReport {
                id: id("r-2"),
                role: Role::Reader,
                cycles: 1,
            },
            ParticipantReport {
                id: id("w-1"),
                role: Role::Writer,
                cycles: 2,
            },
        ];
        let summary = Summary::new(participants, CoordinatorStats::default());
        assert_eq!(summary.reader_cycles, 5);
        assert_eq!(summary.writer_cycles, 2);
        assert!(summary.to_string().starts_with("Finished: 3 participants"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["event"], "summary");
    }
}
