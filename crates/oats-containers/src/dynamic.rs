//! Heap-backed, growable storage with amortized growth.
//!
//! A [`DynamicArray`] owns a boxed slice whose every slot is initialised.
//! Slots in `[0, size)` hold the logical elements; slots in
//! `[size, capacity)` are placeholders, reset to `T::default()` whenever a
//! sparse insert pulls them into the array. Growth builds the new buffer,
//! placeholders included, before moving the live elements across, so a
//! failed or panicking growth leaves the array untouched.

use std::alloc::Layout;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::backing::Backing;
use crate::config::GrowthPolicy;
use crate::error::{growth_failed, index_out_of_range, ContainerError};

/// A growable array with an explicit capacity and a [`GrowthPolicy`].
///
/// Capacity never shrinks. `insert` at an index past the current size is
/// accepted: the array grows to `index + 1` and the skipped slots keep
/// their placeholder value.
///
/// Not safe for concurrent mutation; every mutating operation takes
/// `&mut self`.
///
/// # Examples
///
/// ```
/// use oats_containers::DynamicArray;
///
/// let mut arr = DynamicArray::new(0);
/// arr.push_back(1);
/// arr.push_back(2);
/// arr.push_front(0);
/// assert_eq!(arr.as_slice(), &[0, 1, 2]);
/// assert_eq!(arr.capacity(), 4);
/// ```
pub struct DynamicArray<T> {
    /// Every slot is initialised; `buffer.len()` is the capacity.
    buffer: Box<[T]>,
    size: usize,
    policy: GrowthPolicy,
}

/// Reserve exactly `capacity` slots without initialising any of them.
fn reserve_slots<T>(capacity: usize) -> Result<Vec<T>, ContainerError> {
    let layout = Layout::array::<T>(capacity).map_err(|_| ContainerError::CapacityOverflow {
        requested: capacity,
    })?;
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| ContainerError::AllocationFailed { layout })?;
    Ok(slots)
}

impl<T> DynamicArray<T> {
    /// Number of logical elements.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the array holds no logical elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The growth policy in effect.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Element `index`, or `None` if `index >= size()`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable element `index`, or `None` if `index >= size()`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// The logical elements `[0, size)`.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer[..self.size]
    }

    /// The logical elements `[0, size)`, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer[..self.size]
    }
}

#[allow(unsafe_code)]
impl<T> DynamicArray<T> {
    /// Element `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`size`](Self::size). Debug builds
    /// assert this.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.size,
            "DynamicArray::get_unchecked: {index} >= {}",
            self.size
        );
        // SAFETY: the caller guarantees `index < size`, and
        // `size <= buffer.len()` is an invariant of the type.
        unsafe { self.buffer.get_unchecked(index) }
    }

    /// Mutable element `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`size`](Self::size). Debug builds
    /// assert this.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.size,
            "DynamicArray::get_unchecked_mut: {index} >= {}",
            self.size
        );
        // SAFETY: as for `get_unchecked`.
        unsafe { self.buffer.get_unchecked_mut(index) }
    }
}

impl<T: Default> DynamicArray<T> {
    /// Create an empty array with `initial_capacity` slots and the default
    /// doubling policy. A capacity of 0 is valid; the first insert grows
    /// it to 1.
    ///
    /// Allocation failure is fatal; see [`try_new`](Self::try_new).
    #[track_caller]
    pub fn new(initial_capacity: usize) -> Self {
        Self::with_policy(initial_capacity, GrowthPolicy::default())
    }

    /// Create an empty array with an explicit growth policy.
    #[track_caller]
    pub fn with_policy(initial_capacity: usize, policy: GrowthPolicy) -> Self {
        match Self::try_with_policy(initial_capacity, policy) {
            Ok(arr) => arr,
            Err(err) => growth_failed(err),
        }
    }

    /// Fallible form of [`new`](Self::new).
    pub fn try_new(initial_capacity: usize) -> Result<Self, ContainerError> {
        Self::try_with_policy(initial_capacity, GrowthPolicy::default())
    }

    /// Fallible form of [`with_policy`](Self::with_policy).
    pub fn try_with_policy(
        initial_capacity: usize,
        policy: GrowthPolicy,
    ) -> Result<Self, ContainerError> {
        let mut slots = reserve_slots(initial_capacity)?;
        slots.resize_with(initial_capacity, T::default);
        Ok(Self {
            buffer: slots.into_boxed_slice(),
            size: 0,
            policy,
        })
    }

    /// Grow to exactly `new_capacity` slots.
    ///
    /// No-op when `new_capacity <= capacity()`. On success the first
    /// `size()` elements keep their indices. On failure nothing changes.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), ContainerError> {
        let old_capacity = self.capacity();
        if new_capacity <= old_capacity {
            return Ok(());
        }
        let mut grown = reserve_slots(new_capacity)?;
        // Every placeholder is built before a live element moves, so a
        // panicking `T::default()` leaves `self` untouched.
        grown.resize_with(new_capacity, T::default);

        for (slot, live) in grown.iter_mut().zip(&mut self.buffer[..self.size]) {
            std::mem::swap(slot, live);
        }
        self.buffer = grown.into_boxed_slice();

        log::trace!(
            "DynamicArray grew {old_capacity} -> {new_capacity} slots ({} live)",
            self.size
        );
        Ok(())
    }

    /// Grow to exactly `new_capacity` slots. Allocation failure is fatal.
    #[track_caller]
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reserve(new_capacity) {
            growth_failed(err);
        }
    }

    /// Insert `value` at `index`, shifting `[index, size)` up by one.
    ///
    /// Grows by the policy when `max(index, size) + 1` exceeds capacity.
    /// When `index > size`, the slots `[size, index)` become part of the
    /// array reset to `T::default()`, and `size` becomes
    /// `index + 1`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        let top = index.max(self.size);
        let new_size = top
            .checked_add(1)
            .ok_or(ContainerError::CapacityOverflow { requested: top })?;
        if new_size > self.capacity() {
            let target = self.policy.next_capacity(self.capacity(), new_size)?;
            self.try_reserve(target)?;
        }

        if index < self.size {
            // The placeholder at `size` rotates down into `index`; elements
            // move high-to-low so nothing is overwritten before it moves.
            self.buffer[index..=self.size].rotate_right(1);
        } else {
            // Slots past `size` may have been written through `storage_mut`.
            self.buffer[self.size..index].fill_with(T::default);
        }
        self.buffer[index] = value;
        self.size = new_size;
        Ok(())
    }

    /// Insert `value` at `index`. Allocation failure is fatal.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        if let Err(err) = self.try_insert(index, value) {
            growth_failed(err);
        }
    }

    /// Append `value`. Equivalent to `insert(size(), value)`.
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        self.insert(self.size, value);
    }

    /// Prepend `value`. Equivalent to `insert(0, value)`.
    #[track_caller]
    pub fn push_front(&mut self, value: T) {
        self.insert(0, value);
    }

    /// Fallible form of [`push_back`](Self::push_back).
    pub fn try_push_back(&mut self, value: T) -> Result<(), ContainerError> {
        self.try_insert(self.size, value)
    }

    /// Fallible form of [`push_front`](Self::push_front).
    pub fn try_push_front(&mut self, value: T) -> Result<(), ContainerError> {
        self.try_insert(0, value)
    }
}

impl<T: Default> Default for DynamicArray<T> {
    fn default() -> Self {
        Self {
            buffer: Box::default(),
            size: 0,
            policy: GrowthPolicy::default(),
        }
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            size: self.size,
            policy: self.policy,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Equality compares logical elements only; capacity and policy are ignored.
impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        if index >= self.size {
            index_out_of_range("DynamicArray", index, self.size);
        }
        &self.buffer[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        if index >= self.size {
            index_out_of_range("DynamicArray", index, self.size);
        }
        &mut self.buffer[index]
    }
}

/// As a ring-buffer backing the whole slot buffer is storage; the logical
/// `size` is not consulted.
impl<T: Default> Backing for DynamicArray<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        Self::try_new(capacity)
    }

    fn storage(&self) -> &[T] {
        &self.buffer
    }

    fn storage_mut(&mut self) -> &mut [T] {
        &mut self.buffer
    }

    fn capacity(&self) -> usize {
        self.buffer.len()
    }
}
