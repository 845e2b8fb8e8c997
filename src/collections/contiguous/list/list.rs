use std::borrow::{Borrow, BorrowMut};
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut, Index};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Array;
use crate::collections::sort;
use crate::util::error::{
    CapacityError, CapacityOverflow, Incomparable, IndexOutOfBounds, NegativeCapacity,
};
use crate::util::result::ResultExtension;

/// The capacity used by [`ArrayList::new`], and when growing a list with capacity 0.
pub const DEFAULT_CAP: usize = 8;

/// A resizable contiguous list, based on [`Array<T>`].
///
/// When the list is full, adding an element grows its capacity to `cap * 1.5`, rounded half up.
/// The capacity never shrinks on its own.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `remove_value` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `sort` | `O(n log n)`**, `O(n^2)` |
///
/// \* If the ArrayList doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** Average case. The fixed middle pivot degrades on adversarial inputs.
pub struct ArrayList<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> ArrayList<T> {
    /// Creates a new, empty ArrayList with capacity [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let list: ArrayList<u8> = ArrayList::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), 8);
    /// ```
    pub fn new() -> ArrayList<T> {
        ArrayList::with_cap(DEFAULT_CAP)
    }

    /// Creates a new ArrayList with capacity exactly equal to the provided value. A capacity of 0
    /// doesn't allocate.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let list: ArrayList<u8> = ArrayList::with_cap(5);
    /// assert_eq!(list.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> ArrayList<T> {
        ArrayList {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Creates a new ArrayList with the provided capacity, which may come from an untrusted signed
    /// source.
    ///
    /// # Errors
    /// Returns [`CapacityError::NegativeCapacity`] if `cap` is negative and
    /// [`CapacityError::CapacityOverflow`] if the memory layout would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// assert!(ArrayList::<u8>::try_with_cap(-1).is_err());
    /// assert_eq!(ArrayList::<u8>::try_with_cap(0).map(|l| l.cap()), Ok(0));
    /// ```
    pub fn try_with_cap(cap: isize) -> Result<ArrayList<T>, CapacityError> {
        let cap = usize::try_from(cap).map_err(|_| NegativeCapacity { cap })?;

        Ok(ArrayList {
            arr: Array::try_new_uninit(cap)?,
            len: 0,
        })
    }

    /// Creates an ArrayList holding the elements of `iter` in order, with capacity equal to the
    /// number of elements and no spare room.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let list = ArrayList::from_iter_exact([3, 1, 2]);
    /// assert_eq!(&*list, &[3, 1, 2]);
    /// assert_eq!(list.cap(), 3);
    /// ```
    pub fn from_iter_exact<I>(iter: I) -> ArrayList<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let mut list = ArrayList::with_cap(iter.len());

        for item in iter {
            list.push(item);
        }

        list
    }

    /// Returns the number of elements in the ArrayList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ArrayList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the ArrayList.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Appends the provided value to the end of the ArrayList, growing if required. Always
    /// returns `true`, as appending can't be refused.
    ///
    /// # Panics
    /// Panics if the memory layout of the ArrayList would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::with_cap(1);
    /// for i in 0..=5 {
    ///     assert!(list.push(i));
    /// }
    /// assert_eq!(&*list, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) -> bool {
        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: len < cap after growing, so the write is in bounds of the allocation.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
        true
    }

    /// Inserts the provided value at `index`, shifting the element at that position and all
    /// following elements one place to the right. Always returns `true`.
    ///
    /// # Panics
    /// Panics if `index > len`, or if growing would exceed the maximum capacity.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::from([0, 1, 2]);
    /// list.insert(1, 100);
    /// list.insert(4, 200);
    /// assert_eq!(&*list, &[0, 100, 1, 2, 200]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        self.try_insert(index, value).throw();
        true
    }

    /// Inserts the provided value at `index`, shifting following elements to the right.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`. Nothing is moved or written in this case.
    ///
    /// # Panics
    /// Panics if growing would exceed the maximum capacity.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if self.len == self.cap() {
            self.grow();
        }

        debug_assert!(self.len < self.cap(), "growth must leave a free slot for insertion");

        // Shift a run of len slots, clamped to the end of the allocation. Only the first len -
        // index slots of the run are initialized, the rest are moved as uninit.
        let shift = cmp::min(self.len, self.cap() - index - 1);

        // SAFETY: index <= len < cap, so both index and index + 1 + shift are within the
        // allocation. ptr::copy handles the overlapping ranges and MaybeUninit is allowed to be
        // copied while uninitialized.
        unsafe {
            let slot = self.arr.ptr.add(index);
            ptr::copy(slot.as_ptr(), slot.add(1).as_ptr(), shift);
            slot.write(MaybeUninit::new(value));
        }

        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let list = ArrayList::from([22, 5]);
    /// assert_eq!(list.get(1), Ok(&5));
    /// assert!(list.get(2).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len and all values < len are initialized.
        Ok(unsafe { self.arr[index].assume_init_ref() })
    }

    /// Removes the element at `index`, moving all following elements left to fill the gap.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = "Hello".chars().collect();
    /// assert_eq!(list.remove(1), 'e');
    /// assert_eq!(&*list, &['H', 'l', 'l', 'o']);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at `index`, returning it.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the value at index is initialized and every slot up to len is
        // within the allocation. The value is read out before its slot is overwritten by the
        // following elements, which are then moved as a block.
        let value = unsafe {
            let slot = self.arr.ptr.add(index);
            let value = slot.read().assume_init();
            ptr::copy(slot.add(1).as_ptr(), slot.as_ptr(), self.len - index - 1);
            value
        };

        self.len -= 1;
        Ok(value)
    }

    /// Removes the first occurrence of `value` from the ArrayList, returning `true` if one was
    /// found. If there is no such element, the ArrayList is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::from([Some(1), None, Some(1), None]);
    /// assert!(list.remove_value(&None));
    /// assert!(list.remove_value(&Some(1)));
    /// assert!(!list.remove_value(&Some(2)));
    /// assert_eq!(&*list, &[Some(1), None]);
    /// ```
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.iter().position(|item| item == value) {
            Some(index) => {
                drop(self.remove(index));
                true
            },
            None => false,
        }
    }

    /// Drops all elements of the ArrayList, leaving it with length 0. The capacity is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::from([1, 2, 3]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.cap(), 3);
    /// ```
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();

        // Forget the values first, so that a panicking drop can't lead to a double drop.
        self.len = 0;

        // SAFETY: live covered exactly the initialized values, which are now unreachable through
        // self.
        unsafe { ptr::drop_in_place(live); }
    }

    /// Sorts the ArrayList in place by the natural ordering of `T`. The sort is unstable. See
    /// [`sort::quick_sort_range`] for the algorithm.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::from([22, 5, 12, 3, 7, 4, 34, 5]);
    /// list.sort();
    /// assert_eq!(&*list, &[3, 4, 5, 5, 7, 12, 22, 34]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        sort::quick_sort(self);
    }

    /// Sorts the ArrayList in place with the provided comparator. The sort is unstable.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::from([22, 5, 12, 3]);
    /// list.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(&*list, &[22, 12, 5, 3]);
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::quick_sort_by(self, compare);
    }

    /// Sorts the ArrayList in place with an optional comparator, falling back to the natural
    /// ordering of `T` when `compare` is [`None`].
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::from([2, 3, 1]);
    /// list.sort_with(None);
    /// assert_eq!(&*list, &[1, 2, 3]);
    /// list.sort_with(Some(&mut |a: &i32, b: &i32| b.cmp(a)));
    /// assert_eq!(&*list, &[3, 2, 1]);
    /// ```
    pub fn sort_with(&mut self, compare: Option<&mut dyn FnMut(&T, &T) -> Ordering>)
    where
        T: Ord,
    {
        match compare {
            Some(compare) => self.sort_by(compare),
            None => self.sort(),
        }
    }

    /// Sorts the ArrayList in place by the partial ordering of `T`, checking at each comparison
    /// that an ordering exists.
    ///
    /// # Errors
    /// Returns [`Incomparable`] as soon as an element has no ordering relative to the pivot. The
    /// ArrayList then contains all of its original elements, in an unspecified order.
    ///
    /// # Examples
    /// ```
    /// # use array_list::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::from([2.0, 1.0]);
    /// assert!(list.try_sort().is_ok());
    /// list.push(f64::NAN);
    /// assert!(list.try_sort().is_err());
    /// ```
    pub fn try_sort(&mut self) -> Result<(), Incomparable>
    where
        T: PartialOrd,
    {
        sort::try_quick_sort(self)
    }

    /// Returns the initialized part of the ArrayList as a slice.
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Returns the initialized part of the ArrayList as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Grows the internal Array to allow for the insertion of at least one more element.
    ///
    /// # Panics
    /// Panics if the new capacity overflows or the memory layout of the ArrayList would have a size
    /// that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = match self.cap() {
            0 => DEFAULT_CAP,
            cap => Self::grown_cap(cap).ok_or(CapacityOverflow).throw(),
        };

        self.arr.realloc(new_cap);
    }

    /// Computes `floor(cap * 1.5 + 0.5)` without leaving integer arithmetic.
    pub(crate) fn grown_cap(cap: usize) -> Option<usize> {
        Some(cap.checked_mul(3)?.checked_add(1)? / 2)
    }

    /// Checks that the provided index refers to an initialized element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds { index, len: self.len })
        } else {
            Ok(())
        }
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).throw()
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut list = ArrayList::with_cap(iter.size_hint().0);

        for item in iter {
            list.push(item);
        }

        list
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayList<T> {
    fn from(value: [T; N]) -> Self {
        ArrayList::from_iter_exact(value)
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(value: Vec<T>) -> Self {
        ArrayList::from_iter_exact(value)
    }
}

impl<T: Clone> From<&[T]> for ArrayList<T> {
    fn from(value: &[T]) -> Self {
        ArrayList::from_iter_exact(value.iter().cloned())
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        // Drop all initialized values in place. Dropping self.arr afterwards only deallocates, as
        // it contains MaybeUninit values with a no-op drop.
        self.clear();
    }
}

impl<T> Deref for ArrayList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: ArrayList is valid as a slice for len values, which are all initialized. The
        // pointer is nonnull, properly aligned and the range entirely contained within this
        // ArrayList. The total size is < isize::MAX as the result of being a valid Array.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for ArrayList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: ArrayList is valid as a slice for len values, which are all initialized. The
        // pointer is nonnull, properly aligned and the range entirely contained within this
        // ArrayList. The borrow checker enforces that self isn't accessed while the slice lives.
        unsafe {
            slice::from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for ArrayList<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for ArrayList<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for ArrayList<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for ArrayList<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_cap(self.cap());

        for value in self.iter() {
            list.push(value.clone());
        }

        list
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
