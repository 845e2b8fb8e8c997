//! A small resizable array list, written the way a standard library collection would be.
//!
//! # Purpose
//! [`ArrayList`](collections::contiguous::ArrayList) is a growable, contiguous list with a fixed
//! growth policy (1.5x, rounded half up) and an in-place quicksort that works directly on the
//! list's own storage. It exists to make both of those things explicit rather than hidden behind
//! [`Vec`].
//!
//! # Method
//! Storage is an [`Array`](collections::contiguous::Array) of [`MaybeUninit<T>`](std::mem::MaybeUninit)
//! allocated through the global allocator. Only the first `len` slots are ever initialized. An
//! Array with size 0 doesn't allocate at all, so empty lists share the same dangling buffer.
//!
//! # Error Handling
//! Like a standard library, most methods panic when misused (for example, reading past the end
//! of the list), because forcing every caller to handle a [`Result`] for an index they already know
//! is valid isn't ergonomic. Every panicking method has a `try_` counterpart which returns a
//! strongly typed error from [`error`] instead. Panics carry the message of that same error.
//!
//! # Sorting
//! The sort provided here is a Hoare-partition quicksort with a middle pivot. It is **not**
//! stable: equal elements may be reordered. See [`collections::sort`].
//!
//! # Dependencies
//! This crate only depends on `derive_more`, for the error types.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

/// Error types returned by the `try_` methods of this crate.
pub mod error {
    #[doc(inline)]
    pub use crate::util::error::*;
}
