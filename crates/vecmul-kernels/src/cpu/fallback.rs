//! Portable CPU kernels: the scalar reference and the 8x-unrolled variant.
//!
//! Both work on any architecture. The scalar kernel is the reference
//! semantics every other kernel must match bit-for-bit; the unrolled kernel
//! trades loop overhead for code size while staying fully portable.

use crate::cpu::validate_lengths;
use crate::{KernelProvider, Result};

/// Reference kernel: one multiply per loop iteration, in index order.
///
/// Always available. Serves as the correctness baseline for the unrolled
/// and vectorized kernels.
pub struct ScalarKernel;

impl KernelProvider for ScalarKernel {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn mul_f32(&self, a: &[f32], b: &[f32], out: &mut [f32]) -> Result<()> {
        validate_lengths(a, b, out)?;

        for i in 0..a.len() {
            out[i] = a[i] * b[i];
        }

        Ok(())
    }
}

/// Manually unrolled kernel: eight explicit multiplies per loop iteration,
/// with a scalar tail loop for the remainder.
pub struct UnrolledKernel;

impl KernelProvider for UnrolledKernel {
    fn name(&self) -> &'static str {
        "unrolled"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn mul_f32(&self, a: &[f32], b: &[f32], out: &mut [f32]) -> Result<()> {
        validate_lengths(a, b, out)?;

        let len = a.len();
        let chunks = len / 8;

        for i in 0..chunks {
            let off = i * 8;
            out[off] = a[off] * b[off];
            out[off + 1] = a[off + 1] * b[off + 1];
            out[off + 2] = a[off + 2] * b[off + 2];
            out[off + 3] = a[off + 3] * b[off + 3];
            out[off + 4] = a[off + 4] * b[off + 4];
            out[off + 5] = a[off + 5] * b[off + 5];
            out[off + 6] = a[off + 6] * b[off + 6];
            out[off + 7] = a[off + 7] * b[off + 7];
        }
        for i in (chunks * 8)..len {
            out[i] = a[i] * b[i];
        }

        Ok(())
    }
}
