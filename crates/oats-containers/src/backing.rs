//! Storage capability shared by the ring buffer's backing stores.

use crate::error::ContainerError;

/// Raw slot storage a [`RingBuffer`](crate::RingBuffer) can be layered over.
///
/// A backing store exposes every slot it owns, occupied or not. The ring
/// buffer does its own occupancy bookkeeping and only ever addresses slots
/// in `[0, capacity)`, so the store does not need to know which slots hold
/// live values.
///
/// Implemented by [`FixedArray`](crate::FixedArray) (inline, compile-time
/// capacity) and [`DynamicArray`](crate::DynamicArray) (heap, capacity
/// chosen at construction).
pub trait Backing: Sized {
    /// Element type stored in each slot.
    type Item;

    /// Build a store with exactly `capacity` slots, each holding a
    /// placeholder value.
    fn with_capacity(capacity: usize) -> Result<Self, ContainerError>;

    /// Every slot, in absolute order. `storage().len() == capacity()`.
    fn storage(&self) -> &[Self::Item];

    /// Mutable view of every slot.
    fn storage_mut(&mut self) -> &mut [Self::Item];

    /// Number of slots.
    fn capacity(&self) -> usize {
        self.storage().len()
    }
}
