use std::cmp::{self, Ordering};
use std::convert::Infallible;

use crate::util::error::Incomparable;

/// Sorts `v` in place by the natural ordering of `T`.
pub fn quick_sort<T: Ord>(v: &mut [T]) {
    quick_sort_by(v, T::cmp);
}

/// Sorts `v` in place with the provided comparator.
///
/// # Examples
/// ```
/// # use array_list::collections::sort::quick_sort_by;
/// let mut v = ["ccc", "a", "bb"];
/// quick_sort_by(&mut v, |a, b| a.len().cmp(&b.len()));
/// assert_eq!(v, ["a", "bb", "ccc"]);
/// ```
pub fn quick_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let result: Result<(), Infallible> = try_quick_sort_by(v, |a, b| Ok(compare(a, b)));

    match result {
        Ok(()) => (),
        Err(never) => match never {},
    }
}

/// Sorts `v` in place by the partial ordering of `T`.
///
/// # Errors
/// Returns [`Incomparable`] when an element can't be ordered against the pivot, such as a `NaN`.
/// `v` still holds every one of its elements, but their order is unspecified.
pub fn try_quick_sort<T: PartialOrd>(v: &mut [T]) -> Result<(), Incomparable> {
    try_quick_sort_by(v, |a, b| a.partial_cmp(b).ok_or(Incomparable))
}

/// Sorts `v` in place with a comparator that may fail. Sorting stops at the first error, which is
/// returned as is.
///
/// # Errors
/// Returns the first error produced by `compare`.
pub fn try_quick_sort_by<T, E, F>(v: &mut [T], mut compare: F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    match v.len() {
        0 | 1 => Ok(()),
        len => quick_sort_range(v, 0, len - 1, &mut compare),
    }
}

/// Sorts the inclusive range `v[low..=high]` in place with a recursive, Hoare-partition quicksort.
///
/// The pivot is the value found at the middle of the range, `low + (high - low) / 2`. It isn't
/// randomized, so some inputs (e.g. organ pipes) degrade to `O(n^2)`. The sort isn't stable,
/// because swapping across the pivot can move an element past another one that compares equal to
/// it. Nothing is allocated, the range is only ever reordered through swaps.
///
/// An empty or single element range (`low >= high`) is left untouched.
///
/// # Errors
/// Returns the first error produced by `compare`, leaving the range partially sorted.
///
/// # Panics
/// Panics if `high` is out of bounds of `v` while `low < high`.
pub fn quick_sort_range<T, E, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    compare: &mut F,
) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    if low >= high {
        return Ok(());
    }

    let split = partition(v, low, high, compare)?;

    // low < split <= high, so neither side is the full range again.
    quick_sort_range(v, low, split - 1, compare)?;
    quick_sort_range(v, split, high, compare)
}

/// Partitions `v[low..=high]` around its middle value, returning the index at which the right
/// half starts. Everything before it compares less than or equal to the pivot, everything from it
/// onwards compares greater than or equal.
fn partition<T, E, F>(v: &mut [T], low: usize, high: usize, compare: &mut F) -> Result<usize, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let mut pivot = low + (high - low) / 2;
    let mut left = low;
    let mut right = high;

    loop {
        while left < high && compare(&v[left], &v[pivot])? == Ordering::Less {
            left += 1;
        }
        while right > low && compare(&v[right], &v[pivot])? == Ordering::Greater {
            right -= 1;
        }

        if left <= right {
            v.swap(left, right);

            // The pivot is a value, so follow it if it was one of the swapped elements.
            if pivot == left {
                pivot = right;
            } else if pivot == right {
                pivot = left;
            }

            left += 1;
            if right == low {
                break;
            }
            right -= 1;
        }

        if left > right {
            break;
        }
    }

    // Only an inconsistent comparator can push left past high.
    Ok(cmp::min(left, high))
}
