//! End-to-end tests driving the compiled `vecmul` binary.
//!
//! The capability probe is forced through the `VECMUL_SIMD_FAKE` override
//! so the fatal path is testable on any host.

use std::process::Command;

fn vecmul() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vecmul"))
}

#[test]
fn unsupported_cpu_exits_one_without_touching_anything() {
    let dir = tempfile::tempdir().unwrap();

    let output = vecmul()
        .current_dir(dir.path())
        .env("VECMUL_SIMD_FAKE", "none")
        .args(["--size", "64"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not supported"),
        "expected capability diagnostic on stderr, got: {stderr}"
    );
    // Probe-first contract: no log file, not even an empty truncated one.
    assert!(!dir.path().join("misc").join("timing.csv").exists());
}

#[test]
fn small_run_reports_matching_results() {
    let dir = tempfile::tempdir().unwrap();

    let output = vecmul()
        .current_dir(dir.path())
        .env("VECMUL_SIMD_FAKE", "simd")
        .args(["3", "--size", "1024"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Time taken (scalar):"), "stdout: {stdout}");
    assert!(stdout.contains("Time taken (unrolled):"), "stdout: {stdout}");
    assert!(stdout.contains("Results match: Yes"), "stdout: {stdout}");

    // One log row per kernel, three comma-terminated samples per row.
    let log = std::fs::read_to_string(dir.path().join("misc").join("timing.csv")).unwrap();
    let rows: Vec<&str> = log.lines().collect();
    assert!(rows.len() >= 2, "log: {log:?}");
    for row in rows {
        assert!(row.ends_with(','), "row missing trailing comma: {row:?}");
        let samples: Vec<f64> = row
            .trim_end_matches(',')
            .split(',')
            .map(|field| field.parse().unwrap())
            .collect();
        assert_eq!(samples.len(), 3, "row: {row:?}");
    }
}

#[test]
fn nonsense_iteration_argument_falls_back_to_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = vecmul()
        .current_dir(dir.path())
        .env("VECMUL_SIMD_FAKE", "simd")
        .args(["banana", "--size", "256"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));

    let log = std::fs::read_to_string(dir.path().join("misc").join("timing.csv")).unwrap();
    for row in log.lines() {
        // Exactly one sample per row.
        assert_eq!(row.matches(',').count(), 1, "row: {row:?}");
    }
}

#[test]
fn log_is_truncated_between_runs() {
    let dir = tempfile::tempdir().unwrap();

    let log_path = dir.path().join("misc").join("timing.csv");
    let mut row_counts = Vec::new();

    for _ in 0..2 {
        let output = vecmul()
            .current_dir(dir.path())
            .env("VECMUL_SIMD_FAKE", "simd")
            .args(["--size", "128"])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(0));
        row_counts.push(std::fs::read_to_string(&log_path).unwrap().lines().count());
    }

    // Rows from the first run must not accumulate into the second.
    assert_eq!(row_counts[0], row_counts[1]);
}
