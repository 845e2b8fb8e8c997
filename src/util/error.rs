use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the valid range for the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index provided by the caller.
    pub index: usize,
    /// The length of the collection at the time of the call.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The requested capacity was negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeCapacity {
    /// The capacity provided by the caller.
    pub cap: isize,
}

impl Display for NegativeCapacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Illegal capacity {}!", self.cap)
    }
}

impl Error for NegativeCapacity {}

/// The memory layout required for a capacity would exceed [`isize::MAX`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// Errors which can occur when constructing a list with a caller-provided capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CapacityError {
    /// See [`NegativeCapacity`].
    NegativeCapacity(NegativeCapacity),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}

/// Two elements had no defined order with respect to each other, so sorting couldn't continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incomparable;

impl Display for Incomparable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Elements have no ordering relative to each other!")
    }
}

impl Error for Incomparable {}
