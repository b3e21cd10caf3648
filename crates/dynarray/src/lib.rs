// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array with an explicit growth policy, checked
//! erasure, and a position-based random-access cursor.
//!
//! [`DynArray<T>`] owns exactly one heap allocation and keeps its `len`
//! live elements at the front of it. Reserved space past `len` is
//! uninitialized and never observable through public operations.
//!
//! # Core Guarantees
//!
//! - **Single ownership**: the buffer is released exactly once per
//!   instance on every exit path; cloning produces an independent
//!   buffer (value semantics, no sharing).
//! - **Explicit growth policy**: capacity becomes `n + n / 2` for a
//!   requested size `n`, so N appends cost O(log N) reallocations and
//!   amortized O(1) per element.
//! - **Fallible allocation**: operations that may allocate return
//!   [`Result`] and leave the container in its previous valid state
//!   when the allocator fails.
//! - **Checked by default, unchecked by choice**: `front`/`back`/`at`
//!   and `erase` report typed [`DynArrayError`]s; the zero-overhead
//!   unchecked path is a separate `unsafe` API with documented
//!   preconditions.
//! - **Static cursor invalidation**: a [`Cursor`] borrows its array,
//!   so reallocation or destruction while iterating is a compile
//!   error, not undefined behavior.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use dynarray::{DynArray, DynArrayError};
//!
//! fn example() -> Result<(), DynArrayError> {
//!     let mut values = DynArray::new();
//!     for i in 1..=10 {
//!         values.push(i)?;
//!     }
//!
//!     assert_eq!(*values.front()?, 1);
//!     assert_eq!(*values.back()?, 10);
//!     assert!(values.capacity() >= values.len());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Erasure & Shrinking
//!
//! ```rust
//! use dynarray::{DynArrayError, dynarray};
//!
//! fn example() -> Result<(), DynArrayError> {
//!     let mut values = dynarray![1, 2, 3, 4, 5, 6, 7, 8];
//!
//!     values.erase(2..5)?;
//!     assert_eq!(values.as_slice(), &[1, 2, 6, 7, 8]);
//!
//!     values.shrink_to_fit()?;
//!     assert_eq!(values.capacity(), values.len());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod cursor;
mod dyn_array;
mod error;
mod raw_buffer;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use dyn_array::DynArray;
pub use error::DynArrayError;

/// Creates a [`DynArray`] from a list of values, in order.
///
/// Capacity is exactly the number of values, with no slack.
///
/// ```rust
/// use dynarray::dynarray;
///
/// let values = dynarray![1, 2, 3];
/// assert_eq!(values.as_slice(), &[1, 2, 3]);
/// assert_eq!(values.capacity(), 3);
/// ```
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynArray::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::DynArray::from([$($value),+])
    };
}
