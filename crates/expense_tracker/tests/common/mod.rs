#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

pub const BIN_NAME: &str = "et";

/// Isolated `ET_HOME` for one test; dropped with the test.
pub fn setup_home() -> TempDir {
    TempDir::new().expect("create temp dir")
}

pub fn et(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("ET_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

pub fn run_ok(home: &Path, args: &[&str]) {
    et(home).args(args).assert().success();
}
