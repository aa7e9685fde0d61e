//! aarch64 CPU kernel using NEON 128-bit vector operations.
//!
//! NEON carries four f32 lanes per register, the widest width natively
//! available for f32 on aarch64. The tail-loop structure mirrors the
//! AVX2 kernel.
#![allow(unsafe_op_in_unsafe_fn)]

use crate::cpu::validate_lengths;
use crate::{KernelError, KernelProvider, Result};
use std::arch::aarch64::*;

/// NEON kernel: four f32 lanes per multiply, scalar tail loop.
pub struct NeonKernel;

impl KernelProvider for NeonKernel {
    fn name(&self) -> &'static str {
        "neon"
    }

    fn is_available(&self) -> bool {
        std::arch::is_aarch64_feature_detected!("neon")
    }

    fn mul_f32(&self, a: &[f32], b: &[f32], out: &mut [f32]) -> Result<()> {
        if !self.is_available() {
            return Err(KernelError::UnsupportedHardware {
                required: "NEON".to_string(),
                available: "scalar only".to_string(),
            });
        }
        validate_lengths(a, b, out)?;

        // Safety: NEON confirmed available by runtime check.
        unsafe { mul_neon(a, b, out) };
        Ok(())
    }
}

#[target_feature(enable = "neon")]
unsafe fn mul_neon(a: &[f32], b: &[f32], out: &mut [f32]) {
    let len = a.len();
    let chunks = len / 4;

    for i in 0..chunks {
        let off = i * 4;
        let va = vld1q_f32(a.as_ptr().add(off));
        let vb = vld1q_f32(b.as_ptr().add(off));
        vst1q_f32(out.as_mut_ptr().add(off), vmulq_f32(va, vb));
    }
    for i in (chunks * 4)..len {
        out[i] = a[i] * b[i];
    }
}
