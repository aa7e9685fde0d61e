//! Error types for kernel execution and buffer management.

/// Errors produced by kernel providers and the aligned buffer allocator.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    #[error("required CPU feature not available: need {required}, have {available}")]
    UnsupportedHardware {
        required: String,
        available: String,
    },
    #[error("kernel execution failed: {reason}")]
    ExecutionFailed { reason: String },
    #[error("aligned allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: usize },
}

pub type Result<T> = std::result::Result<T, KernelError>;
