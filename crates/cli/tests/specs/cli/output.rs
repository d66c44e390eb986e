//! Event output specs

use crate::prelude::*;

#[test]
fn text_output_narrates_the_library() {
    let scratch = Scratch::quick();
    scratch
        .rwlib()
        .args(["2", "1", "--run-for", "200ms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("requested access..."))
        .stdout(predicate::str::contains("People currently awaiting: "))
        .stdout(predicate::str::contains("started reading..."))
        .stdout(predicate::str::contains("Readers currently reading: "))
        .stdout(predicate::str::contains("started writing..."))
        .stdout(predicate::str::contains("Finished: 3 participants"));
}

#[test]
fn json_output_is_one_object_per_line() {
    let scratch = Scratch::quick();
    let assert = scratch
        .rwlib()
        .args(["3", "1", "--run-for", "100ms", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let mut writes_started = 0;
    let mut readers_active = 0i64;
    let mut writer_active = false;
    for line in stdout.lines() {
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        match event["event"].as_str().unwrap() {
            "read_started" => {
                assert!(!writer_active, "reader admitted during a write");
                readers_active += 1;
                assert!(readers_active <= 2);
            }
            "read_ended" => readers_active -= 1,
            "write_started" => {
                assert!(!writer_active);
                assert_eq!(readers_active, 0);
                writer_active = true;
                writes_started += 1;
            }
            "write_ended" => writer_active = false,
            _ => {}
        }
    }
    let summary = summary(&assert.get_output().stdout);
    assert_eq!(summary["stats"]["writes_started"], writes_started);
}
