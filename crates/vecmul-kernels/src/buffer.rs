//! Aligned, owning f32 buffer for kernel operands and results.
//!
//! Vector loads perform best when buffers start on a 32-byte boundary, so
//! operand and result buffers are allocated with that alignment guaranteed.
//! The buffer releases its memory in `Drop`, on every exit path.

use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::ptr::NonNull;

use crate::error::{KernelError, Result};

/// Alignment required for 256-bit vector loads and stores.
pub const SIMD_ALIGN: usize = 32;

/// A fixed-length, heap-allocated f32 buffer whose base address is a
/// multiple of [`SIMD_ALIGN`].
pub struct AlignedBuffer {
    ptr: NonNull<f32>,
    len: usize,
}

impl AlignedBuffer {
    /// Allocate a zero-initialized buffer of `len` elements.
    pub fn zeroed(len: usize) -> Result<Self> {
        if len == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len: 0,
            });
        }

        let layout = Self::layout(len)?;
        // Safety: layout has non-zero size (len > 0).
        let raw = unsafe { alloc_zeroed(layout) as *mut f32 };
        let ptr = NonNull::new(raw).ok_or(KernelError::AllocationFailed {
            bytes: layout.size(),
        })?;

        Ok(Self { ptr, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[f32] {
        // Safety: ptr covers len initialized elements (dangling only when
        // len == 0, where from_raw_parts is still valid).
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        // Safety: as above, plus exclusive access through &mut self.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    fn layout(len: usize) -> Result<Layout> {
        let bytes = len
            .checked_mul(std::mem::size_of::<f32>())
            .ok_or(KernelError::AllocationFailed { bytes: usize::MAX })?;
        Layout::from_size_align(bytes, SIMD_ALIGN)
            .map_err(|_| KernelError::AllocationFailed { bytes })
    }
}

impl Drop for AlignedBuffer {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }
        // Safety: same layout as the allocation in `zeroed`.
        if let Ok(layout) = Self::layout(self.len) {
            unsafe { dealloc(self.ptr.as_ptr() as *mut u8, layout) };
        }
    }
}

// Safety: AlignedBuffer uniquely owns its allocation.
unsafe impl Send for AlignedBuffer {}
unsafe impl Sync for AlignedBuffer {}
