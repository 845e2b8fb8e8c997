//! In-place, comparison based sorting.
//!
//! The algorithm is a recursive quicksort using Hoare partitioning around the middle element of
//! each range. It sorts slices directly, so sorting an
//! [`ArrayList`](crate::collections::contiguous::ArrayList) reorders the list's own storage.
//!
//! The sort is **unstable**. Elements that compare equal may end up in a different relative order
//! than they started in. Use [`slice::sort_by`] where stability matters.
//!
//! Comparators can be infallible ([`quick_sort_by`]) or fallible ([`try_quick_sort_by`]). The
//! fallible form lets [`try_quick_sort`] stop with [`Incomparable`](crate::error::Incomparable)
//! when a partial ordering has a gap.

mod quick;
mod tests;
#[cfg(feature = "contiguous")]
mod utility;

pub use quick::*;
#[cfg(feature = "contiguous")]
pub use utility::*;
