//! Inline, compile-time-sized storage.

use std::ops::{Index, IndexMut};

use crate::backing::Backing;
use crate::error::{index_out_of_range, ContainerError};

/// An array of exactly `N` slots stored inline. Never allocates.
///
/// All `N` slots exist from construction. Indexing through `[]` is
/// bounds-checked and panics on violation; callers that already guarantee
/// the bound (for instance through modulo arithmetic) can opt into
/// [`get_unchecked`](Self::get_unchecked).
///
/// # Examples
///
/// ```
/// use oats_containers::FixedArray;
///
/// let mut samples: FixedArray<f32, 4> = FixedArray::new();
/// samples[2] = 1.5;
/// assert_eq!(samples.capacity(), 4);
/// assert_eq!(samples[2], 1.5);
/// assert_eq!(samples.get(4), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixedArray<T, const N: usize> {
    slots: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Number of slots, fixed by the type.
    pub const CAPACITY: usize = N;

    /// Wrap an existing array.
    pub const fn from_array(slots: [T; N]) -> Self {
        Self { slots }
    }

    /// Number of slots. Always `N`.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Shared reference to slot `index`, or `None` if `index >= N`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    /// Mutable reference to slot `index`, or `None` if `index >= N`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    /// All slots as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// All slots as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Unwrap into the underlying array.
    pub fn into_inner(self) -> [T; N] {
        self.slots
    }
}

#[allow(unsafe_code)]
impl<T, const N: usize> FixedArray<T, N> {
    /// Slot `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`. Debug builds assert this.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N, "FixedArray::get_unchecked: {index} >= {N}");
        // SAFETY: the caller guarantees `index < N`.
        unsafe { self.slots.get_unchecked(index) }
    }

    /// Mutable slot `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`. Debug builds assert this.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N, "FixedArray::get_unchecked_mut: {index} >= {N}");
        // SAFETY: the caller guarantees `index < N`.
        unsafe { self.slots.get_unchecked_mut(index) }
    }
}

impl<T: Default, const N: usize> FixedArray<T, N> {
    /// Create an array with every slot set to `T::default()`.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(slots: [T; N]) -> Self {
        Self::from_array(slots)
    }
}

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        if index >= N {
            index_out_of_range("FixedArray", index, N);
        }
        &self.slots[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        if index >= N {
            index_out_of_range("FixedArray", index, N);
        }
        &mut self.slots[index]
    }
}

impl<T: Default, const N: usize> Backing for FixedArray<T, N> {
    type Item = T;

    /// Succeeds only when `capacity == N`.
    fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        if capacity != N {
            return Err(ContainerError::CapacityMismatch {
                requested: capacity,
                fixed: N,
            });
        }
        Ok(Self::new())
    }

    fn storage(&self) -> &[T] {
        &self.slots
    }

    fn storage_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    fn capacity(&self) -> usize {
        N
    }
}
