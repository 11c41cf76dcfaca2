//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

/// Path to the `tabletop` binary cargo built for this test run
pub fn tabletop_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tabletop"))
}

/// Run the tabletop binary in the specified directory with colors disabled
pub fn run_tabletop_in_dir(dir: &Path, args: &[&str]) -> Output {
    run_tabletop_with_env(dir, args, &[])
}

/// Run the tabletop binary with extra environment variables
pub fn run_tabletop_with_env(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    Command::new(tabletop_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("TABLETOP_ASCII")
        .env_remove("RUST_LOG")
        .envs(env.iter().copied())
        .output()
        .expect("Failed to execute tabletop binary")
}

/// Stdout of a finished command as a string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished command as a string
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Write one JSONL data file: one compact JSON value per line
pub fn write_jsonl(path: &Path, records: &[Value]) {
    let body: String = records.iter().map(|r| format!("{}\n", r)).collect();
    std::fs::write(path, body).expect("Failed to write JSONL file");
}

/// Fill an initialized catalog's data files
pub fn write_catalog(dir: &Path, families: &[Value], games: &[Value], relations: &[Value]) {
    let data_dir = dir.join(".tabletop");
    write_jsonl(&data_dir.join("families.jsonl"), families);
    write_jsonl(&data_dir.join("games.jsonl"), games);
    write_jsonl(&data_dir.join("relations.jsonl"), relations);
}
