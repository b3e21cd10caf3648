// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::DynArrayError;
use crate::raw_buffer::RawBuffer;

// =============================================================================
// new()
// =============================================================================

#[test]
fn test_new_is_empty() {
    let buf = RawBuffer::<u32>::new();

    assert_eq!(buf.capacity(), 0);
}

// =============================================================================
// allocate()
// =============================================================================

#[test]
fn test_allocate_exact() {
    let buf = RawBuffer::<u32>::allocate(8).expect("Failed to allocate()");

    assert_eq!(buf.capacity(), 8);
}

#[test]
fn test_allocate_zero_does_not_allocate() {
    let buf = RawBuffer::<u32>::allocate(0).expect("Failed to allocate()");

    assert_eq!(buf.capacity(), 0);
}

#[test]
fn test_overflowing_layout_is_allocation_failure() {
    let err = RawBuffer::<u64>::allocate(usize::MAX / 4)
        .expect_err("allocate() must reject an overflowing layout");

    assert!(matches!(err, DynArrayError::AllocationFailure { .. }));
}

// =============================================================================
// reallocate()
// =============================================================================

#[test]
fn test_reallocate_preserves_live_elements() {
    let mut buf = RawBuffer::<u32>::allocate(4).expect("Failed to allocate()");
    for i in 0..4 {
        // SAFETY: `i` is within the allocated capacity.
        unsafe { buf.as_ptr().add(i).write(i as u32 * 10) };
    }

    buf.reallocate(4, 9).expect("Failed to reallocate()");

    assert_eq!(buf.capacity(), 9);
    for i in 0..4 {
        // SAFETY: the first 4 slots were moved over initialized.
        assert_eq!(unsafe { buf.as_ptr().add(i).read() }, i as u32 * 10);
    }
}

#[test]
fn test_reallocate_same_capacity_is_noop() {
    let mut buf = RawBuffer::<u32>::allocate(4).expect("Failed to allocate()");
    let ptr = buf.as_ptr();

    buf.reallocate(0, 4).expect("Failed to reallocate()");

    assert_eq!(buf.capacity(), 4);
    assert_eq!(buf.as_ptr(), ptr);
}

#[test]
fn test_reallocate_to_zero_releases() {
    let mut buf = RawBuffer::<u32>::allocate(4).expect("Failed to allocate()");

    buf.reallocate(0, 0).expect("Failed to reallocate()");

    assert_eq!(buf.capacity(), 0);
}

// =============================================================================
// release()
// =============================================================================

#[test]
fn test_release_resets_and_is_idempotent() {
    let mut buf = RawBuffer::<u32>::allocate(4).expect("Failed to allocate()");

    buf.release();
    assert_eq!(buf.capacity(), 0);

    buf.release();
    assert_eq!(buf.capacity(), 0);
}

// =============================================================================
// Zero-sized element types
// =============================================================================

#[test]
fn test_zero_sized_elements_never_allocate() {
    let mut buf = RawBuffer::<()>::new();

    assert_eq!(buf.capacity(), usize::MAX);

    buf.reallocate(0, 16).expect("Failed to reallocate()");
    assert_eq!(buf.capacity(), usize::MAX);
}
