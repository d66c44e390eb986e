use super::*;
use rwlib_core::{Role, Timing};

fn quick_plan(readers: usize, writers: usize) -> Plan {
    Plan {
        config: SimulationConfig {
            capacity: 2,
            readers: Timing::instant(),
            writers: Timing::instant(),
        },
        readers,
        writers,
        run_for: Some(Duration::from_millis(50)),
        format: OutputFormat::Json,
    }
}

#[tokio::test]
async fn run_for_limit_stops_every_participant() {
    let summary = run(quick_plan(3, 1), std::future::pending()).await.unwrap();

    assert_eq!(summary.participants.len(), 4);
    let writers = summary
        .participants
        .iter()
        .filter(|p| p.role == Role::Writer)
        .count();
    assert_eq!(writers, 1);
    assert_eq!(summary.stats.reads_started, summary.stats.reads_completed);
    assert_eq!(summary.stats.writes_started, summary.stats.writes_completed);
    assert!(summary.stats.peak_readers <= 2);
}

#[tokio::test]
async fn stop_signal_ends_the_run_early() {
    let mut plan = quick_plan(1, 1);
    plan.run_for = None;

    let summary = run(plan, async { Ok(()) }).await.unwrap();
    assert_eq!(summary.participants.len(), 2);
}

#[tokio::test]
async fn empty_library_still_finishes() {
    let summary = run(quick_plan(0, 0), std::future::pending()).await.unwrap();
    assert!(summary.participants.is_empty());
    assert_eq!(summary.reader_cycles + summary.writer_cycles, 0);
}

#[tokio::test]
async fn invalid_capacity_fails_before_spawning() {
    let mut plan = quick_plan(1, 1);
    plan.config.capacity = 0;
    assert!(run(plan, std::future::pending()).await.is_err());
}
