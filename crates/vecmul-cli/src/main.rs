//! Element-wise multiply benchmark.
//!
//! Runs every available kernel strategy (scalar, unrolled, vectorized)
//! over the same randomly filled operand buffers, reports the mean elapsed
//! time per kernel, appends raw per-iteration samples to `misc/timing.csv`,
//! and verifies all strategies produced bit-identical output.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::{debug, error};

use vecmul_kernels::features;
use vecmul_kernels::generate::fill_random;
use vecmul_kernels::verify::outputs_match;
use vecmul_kernels::{AlignedBuffer, KernelManager};

mod harness;

// Exit codes for precise triage
const EXIT_UNSUPPORTED_HARDWARE: i32 = 1;
const EXIT_GENERIC_FAIL: i32 = 1;

/// Element count matching the original benchmark's 256M-float buffers.
const DEFAULT_SIZE: usize = 1024 * 1024 * 256;

/// Per-iteration timing samples land here, one row per kernel.
const TIMING_LOG: &str = "misc/timing.csv";

/// Benchmark element-wise f32 multiplication across kernel strategies
#[derive(Parser)]
#[command(name = "vecmul")]
#[command(about = "Benchmark scalar, unrolled, and SIMD element-wise multiply kernels")]
#[command(version)]
struct Cli {
    /// Timing iterations per kernel; non-numeric or missing input runs one
    /// iteration
    #[arg(value_name = "ITERATIONS")]
    iterations: Option<String>,

    /// Number of f32 elements per buffer
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    // Probe capability before touching any file or allocating any buffer;
    // everything downstream assumes the vectorized kernel can run.
    if !features::simd_available() {
        eprintln!(
            "{} is not supported on this CPU!",
            features::required_feature_name()
        );
        std::process::exit(EXIT_UNSUPPORTED_HARDWARE);
    }
    debug!("{}", features::capability_summary());

    if let Err(e) = run(&cli) {
        error!("Benchmark failed: {e}");
        let mut source = e.source();
        while let Some(err) = source {
            error!("  Caused by: {err}");
            source = err.source();
        }
        std::process::exit(EXIT_GENERIC_FAIL);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let iterations = harness::parse_iterations(cli.iterations.as_deref());
    let mut log = harness::create_log(Path::new(TIMING_LOG));

    let mut a = AlignedBuffer::zeroed(cli.size).context("Failed to allocate operand A")?;
    let mut b = AlignedBuffer::zeroed(cli.size).context("Failed to allocate operand B")?;

    let mut rng = rand::rng();
    fill_random(&mut rng, a.as_mut_slice());
    fill_random(&mut rng, b.as_mut_slice());

    let manager = KernelManager::new();
    debug!("Kernel providers: {:?}", manager.list_available_providers());
    let mut results: Vec<(&'static str, AlignedBuffer)> = Vec::new();

    // Reference-first order: scalar, unrolled, then the vectorized kernel.
    for provider in manager.providers().iter().rev() {
        let mut out = AlignedBuffer::zeroed(cli.size)
            .with_context(|| format!("Failed to allocate result buffer for {}", provider.name()))?;

        let average = harness::time_kernel(
            provider.as_ref(),
            a.as_slice(),
            b.as_slice(),
            out.as_mut_slice(),
            iterations,
            log.as_mut(),
        )
        .with_context(|| format!("Kernel {} failed", provider.name()))?;

        println!("Time taken ({}): {} seconds", provider.name(), average);
        results.push((provider.name(), out));
    }

    let views: Vec<&[f32]> = results.iter().map(|(_, out)| out.as_slice()).collect();
    let matched = outputs_match(&views);
    println!("Results match: {}", if matched { "Yes" } else { "No" });

    Ok(())
}

fn setup_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
