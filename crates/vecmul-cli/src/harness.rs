//! Timing harness and CSV log handling.
//!
//! Each kernel invocation is measured with a monotonic high-resolution
//! clock. Per-iteration samples are appended to the current log row as
//! comma-terminated values; the row ends with a newline after the last
//! iteration. Logging failures never abort the benchmark: if the log could
//! not be opened the samples are simply dropped.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use tracing::debug;
use vecmul_kernels::{KernelProvider, Result};

/// Truncate (or create) the timing log, creating its parent directory if
/// needed. Returns `None` when the file cannot be opened; the benchmark
/// proceeds without logging in that case.
pub fn create_log(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    match File::create(path) {
        Ok(file) => Some(file),
        Err(err) => {
            debug!("timing log {} unavailable, skipping: {err}", path.display());
            None
        }
    }
}

/// Invoke `kernel` `iterations` times and return the mean elapsed seconds.
///
/// Writes one comma-terminated sample per iteration to `log` when present,
/// then terminates the row. `iterations` must be positive.
pub fn time_kernel<W: Write>(
    kernel: &dyn KernelProvider,
    a: &[f32],
    b: &[f32],
    out: &mut [f32],
    iterations: usize,
    mut log: Option<&mut W>,
) -> Result<f64> {
    debug_assert!(iterations > 0);
    let mut total = 0.0f64;

    for _ in 0..iterations {
        let start = Instant::now();
        kernel.mul_f32(a, b, out)?;
        let elapsed = start.elapsed().as_secs_f64();
        total += elapsed;

        if let Some(writer) = log.as_deref_mut() {
            let _ = write!(writer, "{elapsed},");
        }
    }

    if let Some(writer) = log.as_deref_mut() {
        let _ = writeln!(writer);
    }

    Ok(total / iterations as f64)
}

/// Iteration count from the optional positional argument. Absent,
/// non-numeric, or non-positive input falls back to a single iteration.
pub fn parse_iterations(arg: Option<&str>) -> usize {
    arg.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}
