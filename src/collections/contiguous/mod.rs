//! Contiguous collection types. [`Array`] is a raw buffer sized at runtime and [`ArrayList`] is the
//! growable list built on top of it.
#![warn(missing_docs)]

pub mod array;
pub mod list;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use list::ArrayList;
