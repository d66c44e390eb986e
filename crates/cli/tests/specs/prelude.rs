//! Shared helpers for CLI specs

use std::path::PathBuf;
use std::time::Duration;

pub use assert_cmd::Command;
pub use predicates::prelude::*;

/// Short holds and idles so a run produces traffic quickly
pub const QUICK_CONFIG: &str = r#"
capacity = 2

[readers.active]
min = "1ms"
max = "5ms"

[readers.idle]
min = "1ms"
max = "5ms"

[writers.active]
min = "1ms"
max = "5ms"

[writers.idle]
min = "1ms"
max = "5ms"
"#;

/// A scratch directory for config and log files
pub struct Scratch {
    dir: tempfile::TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Scratch directory with `library.toml` holding [`QUICK_CONFIG`]
    pub fn quick() -> Self {
        let scratch = Self::new();
        scratch.file("library.toml", QUICK_CONFIG);
        scratch
    }

    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// The binary pointed at this directory's `library.toml`
    pub fn rwlib(&self) -> Command {
        let mut cmd = rwlib();
        cmd.arg("--config").arg(self.path("library.toml"));
        cmd
    }
}

pub fn rwlib() -> Command {
    let mut cmd = Command::cargo_bin("rwlib").unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd.timeout(Duration::from_secs(30));
    cmd
}

/// The summary is the last JSON line on stdout
pub fn summary(stdout: &[u8]) -> serde_json::Value {
    let text = String::from_utf8_lossy(stdout);
    let last = text.lines().last().expect("no output");
    let value: serde_json::Value = serde_json::from_str(last).unwrap();
    assert_eq!(value["event"], "summary", "last line was {last}");
    value
}
