use std::cmp::Ordering;

use crate::collections::contiguous::ArrayList;

/// Sorts `list` by the natural ordering of its elements.
///
/// # Examples
/// ```
/// # use array_list::collections::{contiguous::ArrayList, sort};
/// let mut list = ArrayList::from([3, 1, 2]);
/// sort::sort(&mut list);
/// assert_eq!(&*list, &[1, 2, 3]);
/// ```
pub fn sort<T: Ord>(list: &mut ArrayList<T>) {
    list.sort_with(None);
}

/// Sorts `list` with `compare`, or by the natural ordering of its elements if `compare` is
/// [`None`].
///
/// # Examples
/// ```
/// # use array_list::collections::{contiguous::ArrayList, sort};
/// let mut list = ArrayList::from([3, 1, 2]);
/// sort::sort_with(&mut list, Some(&mut |a: &i32, b: &i32| b.cmp(a)));
/// assert_eq!(&*list, &[3, 2, 1]);
/// ```
pub fn sort_with<T: Ord>(
    list: &mut ArrayList<T>,
    compare: Option<&mut dyn FnMut(&T, &T) -> Ordering>,
) {
    list.sort_with(compare);
}
