//! Collection types and the algorithms that operate on them.
//!
//! # Method
//! [`ArrayList`](contiguous::ArrayList) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), so the sorter in [`sort`] works on plain slices and sorts a list's storage directly,
//! without copying it out first.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "sort")]
pub mod sort;
