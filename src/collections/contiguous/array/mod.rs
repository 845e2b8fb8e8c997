//! A module containing [`Array`], the raw buffer underneath
//! [`ArrayList`](super::ArrayList).
//!
//! [`Array`] is also re-exported under the parent module.

mod array;

pub use array::*;
