use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A fixed-size buffer that is sized at runtime. Similar to a [`Box<[T]>`](Box<T>), but able to
/// be reallocated in place when it holds [`MaybeUninit<T>`].
///
/// An Array of size zero never allocates and instead holds a dangling pointer. All empty Arrays are
/// therefore interchangeable, acting as a shared empty buffer.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
///
/// \* The global allocator may be able to grow the allocation in place.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0. No memory is allocated.
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        Self::try_new_uninit(size).throw()
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`, returning an error
    /// rather than panicking if the layout can't be represented.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if memory layout size exceeds [`isize::MAX`].
    pub fn try_new_uninit(size: usize) -> Result<Array<MaybeUninit<T>>, CapacityOverflow> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size)?;
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Ok(Array {
            ptr,
            size,
            _phantom: PhantomData,
        })
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow)
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Reallocate the Array to have size equal to `new_size`, with new locations uninitialized.
    /// Values in locations that remain within the Array are preserved. Locations that are removed
    /// by shrinking are **not** dropped, because they may not be initialized.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`]. (`new_size * size_of::<T>() > isize::MAX`)
    pub fn realloc(&mut self, new_size: usize) {
        self.try_realloc(new_size).throw()
    }

    /// Reallocate the Array to have size equal to `new_size`. See [`Array::realloc`].
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the new layout size exceeds [`isize::MAX`]. The Array is
    /// left unchanged in this case.
    pub fn try_realloc(&mut self, new_size: usize) -> Result<(), CapacityOverflow> {
        let new_layout = Self::make_layout(new_size)?;

        let new_ptr = match (self.size, new_size) {
            (_, _) if size_of::<T>() == 0 => {
                // Zero-sized types are never allocated, the dangling pointer is kept and only the
                // size changes.
                self.ptr
            },
            (old, new) if old == new => return Ok(()),
            (0, _) => Self::make_ptr(new_layout),
            (_, 0) => {
                let old_layout = Self::make_layout(self.size)?;
                // SAFETY: ptr was allocated in the global allocator with old_layout, which has a
                // non-zero size because both 0 size and ZSTs are guarded against.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout); }
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout(self.size)?;

                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        old_layout,
                        new_layout.size(),
                    ).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(
                    || alloc::handle_alloc_error(new_layout)
                )
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
        Ok(())
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All values within the Array are initialized (or MaybeUninit, which is a no-op).
        // The slice is entirely contained within the allocation.
        unsafe { ptr::drop_in_place(&mut **self as *mut [T]); }

        // The layout was valid when this Array was allocated, so it is still valid now.
        if let Ok(layout) = Array::<T>::make_layout(self.size) {
            if layout.size() != 0 {
                // SAFETY: ptr is always allocated in the global allocator and layout is the same
                // as when allocated. Zero-sized layouts aren't allocated and are guarded against
                // deallocation.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
            }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX. Array's safe API doesn't provide access to raw
        // pointers, so the borrow checker prevents mutation throughout 'a.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX. Array's safe API doesn't provide access to raw
        // pointers, so the borrow checker prevents access throughout 'a.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
        }
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}
