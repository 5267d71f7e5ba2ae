//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use grid_report::grid::Grid;
use grid_report::plant::{Plant, PlantStatus, PlantType};

/// Menu prompt as printed before any input is read.
pub const PROMPT: &str = "1) Generatee Power Plant Report\n\
                          2) Generatee Power Grid Report\n\
                          Please choose an option: ";

/// Grid with no active plants (200 load, all capacity inactive/unavailable).
pub fn idle_grid() -> Grid {
    Grid::new(
        200.0,
        vec![
            Plant::new(PlantType::Hydro, 100.0, PlantStatus::Inactive),
            Plant::new(PlantType::Solar, 50.0, PlantStatus::Unavailable),
        ],
    )
}

/// Runs the binary with `args`, feeding `stdin` as its standard input.
pub fn run_bin(args: &[&str], stdin: &str) -> Output {
    run_bin_with_stdout(args, stdin, Stdio::piped())
}

/// Like [`run_bin`], but with the child's stdout bound to `stdout`.
pub fn run_bin_with_stdout(args: &[&str], stdin: &str, stdout: Stdio) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_grid-report"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(stdout)
        .stderr(Stdio::piped())
        .spawn()
        .expect("grid-report process should start");

    // The child may exit before reading (e.g. on a bad catalog), closing the pipe.
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }

    child
        .wait_with_output()
        .expect("grid-report process should finish")
}

/// Stdout of a run, with the leading prompt removed.
pub fn body_after_prompt(output: &Output) -> String {
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout should be valid UTF-8");
    stdout
        .strip_prefix(PROMPT)
        .unwrap_or_else(|| panic!("stdout should start with the prompt, got {stdout:?}"))
        .to_string()
}

/// Writes `contents` to a fresh file under the test target directory.
pub fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("grid-report-tests");
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("temp file should be writable");
    path
}
