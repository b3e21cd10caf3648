// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Owned backing storage for [`DynArray`](crate::DynArray).
//!
//! `RawBuffer` manages exactly one contiguous heap allocation and
//! nothing else: it never constructs or drops elements. Element
//! lifecycle is the container's responsibility, which keeps a single
//! owner for the memory and a single owner for the values.

use alloc::alloc::{alloc, dealloc, handle_alloc_error};
use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

use crate::error::DynArrayError;

/// A contiguous allocation of `cap` elements, dangling when `cap == 0`.
///
/// Dropping a `RawBuffer` frees the allocation without reading element
/// contents; live elements must have been dropped or moved out first.
#[derive(Debug)]
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Creates an empty buffer with no allocation.
    ///
    /// Zero-sized element types never allocate; their capacity
    /// saturates at `usize::MAX`.
    pub(crate) const fn new() -> Self {
        let cap = if mem::size_of::<T>() == 0 {
            usize::MAX
        } else {
            0
        };

        Self {
            ptr: NonNull::dangling(),
            cap,
            _marker: PhantomData,
        }
    }

    /// Allocates a fresh buffer of exactly `cap` elements.
    pub(crate) fn allocate(cap: usize) -> Result<Self, DynArrayError> {
        let mut buf = Self::new();
        buf.reallocate(0, cap)?;
        Ok(buf)
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Replaces the allocation with one of exactly `new_cap` elements,
    /// moving the first `live` elements into it.
    ///
    /// If the new allocation cannot be obtained, the old one is left
    /// valid and unchanged. Callers guarantee `live <= new_cap` and
    /// that `[0, live)` is initialized; the elements are moved bitwise,
    /// so the old copies must not be dropped afterwards (the old
    /// allocation is released here).
    pub(crate) fn reallocate(&mut self, live: usize, new_cap: usize) -> Result<(), DynArrayError> {
        debug_assert!(live <= new_cap);

        if mem::size_of::<T>() == 0 || new_cap == self.cap {
            return Ok(());
        }

        if new_cap == 0 {
            self.release();
            return Ok(());
        }

        let layout = Self::layout_for(new_cap)?;
        // SAFETY: `layout` has non-zero size (`new_cap > 0` and `T` is
        // not zero-sized).
        let raw = unsafe { alloc(layout) };
        let Some(new_ptr) = NonNull::new(raw.cast::<T>()) else {
            return Err(DynArrayError::AllocationFailure {
                bytes: layout.size(),
            });
        };

        if live > 0 {
            // SAFETY: both allocations hold at least `live` elements
            // and are distinct blocks.
            unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), live) };
        }

        self.release();
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Frees the allocation, resetting to the empty state.
    pub(crate) fn release(&mut self) {
        if mem::size_of::<T>() == 0 || self.cap == 0 {
            return;
        }

        let layout = match Layout::array::<T>(self.cap) {
            Ok(layout) => layout,
            // The layout was validated when the allocation was made.
            Err(_) => return,
        };

        // SAFETY: `ptr` was obtained from `alloc` with this layout and
        // has not been freed (`cap > 0`).
        unsafe { dealloc(self.ptr.as_ptr().cast(), layout) };

        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    fn layout_for(cap: usize) -> Result<Layout, DynArrayError> {
        Layout::array::<T>(cap).map_err(|_| DynArrayError::AllocationFailure {
            bytes: cap.saturating_mul(mem::size_of::<T>()),
        })
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Diverges through the global allocator's out-of-memory hook.
///
/// Infallible trait surfaces (`Clone`, `FromIterator`, `Extend`,
/// `From`) cannot return an error, so they follow the standard library
/// convention and route allocation failure here.
pub(crate) fn alloc_failure_abort<T>(err: DynArrayError) -> ! {
    let bytes = match err {
        DynArrayError::AllocationFailure { bytes } => bytes,
        _ => mem::size_of::<T>(),
    };

    match Layout::from_size_align(bytes, mem::align_of::<T>()) {
        Ok(layout) => handle_alloc_error(layout),
        Err(_) => handle_alloc_error(Layout::new::<T>()),
    }
}
