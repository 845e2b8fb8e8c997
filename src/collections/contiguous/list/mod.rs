//! A module containing [`ArrayList`], a growable list backed by an [`Array`](super::Array).
//!
//! Borrowed iteration is provided by [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut) from [`std::slice`], through `Deref<Target = [T]>`.
//!
//! [`ArrayList`] is also re-exported under the parent module.

mod list;

pub use list::*;
