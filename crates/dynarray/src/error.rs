// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for dynarray.
use thiserror::Error;

/// Errors that can occur when operating on a
/// [`DynArray`](crate::DynArray).
///
/// Every fallible operation reports one of these instead of clamping or
/// silently ignoring the request. Unchecked operations
/// ([`get_unchecked`](crate::DynArray::get_unchecked) and friends) are
/// `unsafe` with documented preconditions and do not report errors.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DynArrayError {
    /// `front()` or `back()` was called on an empty container.
    #[error("container is empty")]
    EmptyContainer,

    /// A checked index was at or past the live length.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The live length at the time of the request.
        len: usize,
    },

    /// An erase range was inverted or reached past the live length.
    #[error("invalid range {from}..{to} for length {len}")]
    InvalidRange {
        /// Inclusive start of the requested range.
        from: usize,
        /// Exclusive end of the requested range.
        to: usize,
        /// The live length at the time of the request.
        len: usize,
    },

    /// The global allocator could not satisfy a storage request.
    ///
    /// The container is left in its previous valid state; the old
    /// buffer and its contents are untouched.
    #[error("allocation of {bytes} bytes failed")]
    AllocationFailure {
        /// Size of the allocation that was requested.
        bytes: usize,
    },
}
