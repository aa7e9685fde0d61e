//! CPU kernels for benchmarking element-wise f32 multiplication.
//!
//! Three semantically identical kernel strategies are provided behind the
//! [`KernelProvider`] trait: a plain scalar loop, a manually 8x-unrolled
//! loop, and a SIMD loop (AVX2 on x86_64, NEON on aarch64). All variants
//! must produce bit-identical output for identical operands, which is the
//! property the benchmark binary verifies.

use std::sync::OnceLock;

pub mod buffer;
pub mod cpu;
pub mod error;
pub mod features;
pub mod generate;
pub mod verify;

pub use buffer::AlignedBuffer;
pub use error::{KernelError, Result};

/// Kernel provider trait
pub trait KernelProvider: Send + Sync {
    fn name(&self) -> &'static str;
    fn is_available(&self) -> bool;
    /// Element-wise multiply: `out[i] = a[i] * b[i]` for all `i`.
    ///
    /// All three slices must have the same length. An empty length is a
    /// no-op.
    fn mul_f32(&self, a: &[f32], b: &[f32], out: &mut [f32]) -> Result<()>;
}

/// Kernel manager holding all providers in preference order (best first,
/// scalar reference last) with cached best-provider selection.
pub struct KernelManager {
    providers: Vec<Box<dyn KernelProvider>>,
    selected: OnceLock<usize>,
}

impl KernelManager {
    pub fn new() -> Self {
        let mut providers: Vec<Box<dyn KernelProvider>> = vec![
            Box::new(cpu::UnrolledKernel),
            Box::new(cpu::ScalarKernel),
        ];

        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            if is_x86_feature_detected!("avx2") {
                providers.insert(0, Box::new(cpu::Avx2Kernel));
            }
        }

        #[cfg(all(target_arch = "aarch64", feature = "neon"))]
        {
            if std::arch::is_aarch64_feature_detected!("neon") {
                providers.insert(0, Box::new(cpu::NeonKernel));
            }
        }

        Self {
            providers,
            selected: OnceLock::new(),
        }
    }

    /// All registered providers, best first. The scalar reference kernel is
    /// always present and always last.
    pub fn providers(&self) -> &[Box<dyn KernelProvider>] {
        &self.providers
    }

    /// Select the best available kernel provider with caching
    pub fn select_best(&self) -> Result<&dyn KernelProvider> {
        let selected_idx = self.selected.get_or_init(|| {
            for (i, provider) in self.providers.iter().enumerate() {
                if provider.is_available() {
                    log::info!("Selected kernel provider: {}", provider.name());
                    return i;
                }
            }
            // Scalar kernel is always available and always last
            self.providers.len() - 1
        });

        Ok(self.providers[*selected_idx].as_ref())
    }

    /// List all available kernel providers
    pub fn list_available_providers(&self) -> Vec<&'static str> {
        self.providers
            .iter()
            .filter(|provider| provider.is_available())
            .map(|provider| provider.name())
            .collect()
    }
}

impl Default for KernelManager {
    fn default() -> Self {
        Self::new()
    }
}

// Re-export commonly used types
pub use cpu::{ScalarKernel, UnrolledKernel};
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use cpu::Avx2Kernel;
#[cfg(all(target_arch = "aarch64", feature = "neon"))]
pub use cpu::NeonKernel;
