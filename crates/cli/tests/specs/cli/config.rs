//! Configuration file specs

use crate::prelude::*;

#[test]
fn inverted_range_fails_at_startup() {
    let scratch = Scratch::new();
    scratch.file(
        "library.toml",
        r#"
[readers.active]
min = "3s"
max = "1s"
"#,
    );

    scratch
        .rwlib()
        .args(["1", "1", "--run-for", "10ms"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn missing_config_file_fails() {
    rwlib()
        .args(["--config", "/nonexistent/library.toml", "--run-for", "10ms"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn capacity_flag_overrides_file() {
    let scratch = Scratch::quick();
    let assert = scratch
        .rwlib()
        .args(["4", "0", "--capacity", "1", "--run-for", "150ms", "--format", "json"])
        .assert()
        .success();

    let summary = summary(&assert.get_output().stdout);
    assert_eq!(summary["stats"]["peak_readers"], 1);
}

#[test]
fn log_file_receives_tracing_output() {
    let scratch = Scratch::quick();
    let log = scratch.path("logs/rwlib.log");

    scratch
        .rwlib()
        .env("RUST_LOG", "info")
        .args(["1", "1", "--run-for", "50ms", "--log-file"])
        .arg(&log)
        .assert()
        .success();

    let content = std::fs::read_to_string(&log).unwrap();
    assert!(content.contains("starting library"), "log was: {content}");
}
