//! Runtime capability probe for the SIMD kernel.
//!
//! The benchmark refuses to run when the wide-vector instruction set its
//! vectorized kernel needs is absent, so the probe runs before any buffer
//! is allocated or any file is touched. The `VECMUL_SIMD_FAKE` environment
//! variable overrides real detection for deterministic testing of that
//! fatal path: `none` forces "absent", `simd` forces "present".

/// Check whether SIMD kernel support was compiled into this binary.
///
/// This does NOT check runtime hardware support.
#[inline]
pub fn simd_compiled() -> bool {
    cfg!(any(
        all(target_arch = "x86_64", feature = "avx2"),
        all(target_arch = "aarch64", feature = "neon"),
    ))
}

/// Name of the instruction-set extension required on this architecture.
pub fn required_feature_name() -> &'static str {
    if cfg!(target_arch = "x86_64") {
        "AVX2"
    } else if cfg!(target_arch = "aarch64") {
        "NEON"
    } else {
        "SIMD"
    }
}

/// Check whether the SIMD kernel can run on this CPU.
///
/// `VECMUL_SIMD_FAKE` takes precedence over real hardware detection.
pub fn simd_available() -> bool {
    if let Some(forced) = fake_override() {
        return forced;
    }

    #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
    {
        if is_x86_feature_detected!("avx2") {
            return true;
        }
    }

    #[cfg(all(target_arch = "aarch64", feature = "neon"))]
    {
        if std::arch::is_aarch64_feature_detected!("neon") {
            return true;
        }
    }

    false
}

/// Human-readable capability summary for diagnostics.
pub fn capability_summary() -> String {
    format!(
        "{} support: compiled {}, runtime {}",
        required_feature_name(),
        if simd_compiled() { "yes" } else { "no" },
        if simd_available() { "yes" } else { "no" },
    )
}

fn fake_override() -> Option<bool> {
    override_from(std::env::var("VECMUL_SIMD_FAKE").ok().as_deref())
}

fn override_from(value: Option<&str>) -> Option<bool> {
    match value {
        Some("none") => Some(false),
        Some("simd") => Some(true),
        _ => None,
    }
}
