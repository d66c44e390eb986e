//! Argument handling specs
//!
//! Counts are lenient: bad values fall back to defaults with a warning.

use crate::prelude::*;

#[test]
fn help_describes_counts() {
    rwlib()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of readers"))
        .stdout(predicate::str::contains("--run-for"));
}

#[test]
fn explicit_counts_spawn_that_many_participants() {
    let scratch = Scratch::quick();
    let output = scratch
        .rwlib()
        .args(["2", "1", "--run-for", "200ms", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary = summary(&output);
    assert_eq!(summary["participants"].as_array().unwrap().len(), 3);
    assert!(summary["stats"]["peak_readers"].as_u64().unwrap() <= 2);
}

#[test]
fn invalid_counts_fall_back_to_defaults() {
    let scratch = Scratch::quick();
    let assert = scratch
        .rwlib()
        .args(["many", "-1", "--run-for", "100ms", "--format", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Invalid number of readers, using default value: 10",
        ))
        .stderr(predicate::str::contains(
            "Invalid number of writers, using default value: 3",
        ));

    let summary = summary(&assert.get_output().stdout);
    assert_eq!(summary["participants"].as_array().unwrap().len(), 13);
}

#[test]
fn bad_run_for_is_rejected() {
    rwlib()
        .args(["1", "1", "--run-for", "soon"])
        .assert()
        .failure();
}

#[test]
fn zero_capacity_is_rejected() {
    rwlib()
        .args(["1", "1", "--capacity", "0", "--run-for", "10ms"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("capacity must be at least 1"));
}
