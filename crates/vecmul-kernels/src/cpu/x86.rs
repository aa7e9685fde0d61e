//! x86_64 CPU kernel using AVX2 256-bit vector operations.
#![allow(unsafe_op_in_unsafe_fn)]

use crate::cpu::validate_lengths;
use crate::{KernelError, KernelProvider, Result};
use std::arch::x86_64::*;

/// AVX2 kernel: eight f32 lanes per multiply, scalar tail loop.
///
/// Uses unaligned-safe loads and stores, so it accepts any slice while
/// still benefiting from the 32-byte alignment the benchmark's buffers
/// guarantee.
pub struct Avx2Kernel;

impl KernelProvider for Avx2Kernel {
    fn name(&self) -> &'static str {
        "avx2"
    }

    fn is_available(&self) -> bool {
        is_x86_feature_detected!("avx2")
    }

    fn mul_f32(&self, a: &[f32], b: &[f32], out: &mut [f32]) -> Result<()> {
        if !self.is_available() {
            return Err(KernelError::UnsupportedHardware {
                required: "AVX2".to_string(),
                available: "scalar only".to_string(),
            });
        }
        validate_lengths(a, b, out)?;

        // Safety: AVX2 confirmed available by runtime check.
        unsafe { mul_avx2(a, b, out) };
        Ok(())
    }
}

#[target_feature(enable = "avx2")]
unsafe fn mul_avx2(a: &[f32], b: &[f32], out: &mut [f32]) {
    let len = a.len();
    let chunks = len / 8;

    for i in 0..chunks {
        let off = i * 8;
        let va = _mm256_loadu_ps(a.as_ptr().add(off));
        let vb = _mm256_loadu_ps(b.as_ptr().add(off));
        _mm256_storeu_ps(out.as_mut_ptr().add(off), _mm256_mul_ps(va, vb));
    }
    for i in (chunks * 8)..len {
        out[i] = a[i] * b[i];
    }
}
