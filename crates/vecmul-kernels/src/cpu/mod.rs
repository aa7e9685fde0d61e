//! CPU kernel implementations

pub mod fallback;

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub mod x86;

#[cfg(all(target_arch = "aarch64", feature = "neon"))]
pub mod arm;

pub use fallback::{ScalarKernel, UnrolledKernel};

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use x86::Avx2Kernel;

#[cfg(all(target_arch = "aarch64", feature = "neon"))]
pub use arm::NeonKernel;

use crate::error::{KernelError, Result};

/// Operand and result slices must all share one length.
pub(crate) fn validate_lengths(a: &[f32], b: &[f32], out: &[f32]) -> Result<()> {
    if a.len() != b.len() || a.len() != out.len() {
        return Err(KernelError::ExecutionFailed {
            reason: format!(
                "operand/result length mismatch: a={}, b={}, out={}",
                a.len(),
                b.len(),
                out.len()
            ),
        });
    }
    Ok(())
}
