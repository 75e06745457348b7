//! Fixed-capacity circular queue over a pluggable backing store.
//!
//! [`RingBuffer`] keeps the most recent `capacity` values. Enqueueing into
//! a full ring evicts the oldest value instead of failing, which makes it a
//! sliding window over a stream (position history, recent events) rather
//! than a bounded channel.
//!
//! Storage is delegated to a [`Backing`] store chosen by type:
//!
//! - [`InlineRingBuffer<T, N>`] over [`FixedArray`], allocation-free with
//!   capacity fixed at compile time;
//! - [`HeapRingBuffer<T>`] over [`DynamicArray`], capacity chosen once at
//!   construction.
//!
//! Logical index `i` (0 = oldest) lives in absolute slot
//! `(head + i) % capacity`.

use std::ops::{Index, IndexMut};

use crate::backing::Backing;
use crate::dynamic::DynamicArray;
use crate::error::{index_out_of_range, ContainerError};
use crate::fixed::FixedArray;

/// A circular queue layered over a [`Backing`] store.
///
/// Vacated slots are refilled with `Default::default()`, so values leave
/// the ring (and are dropped, if discarded) as soon as they are dequeued
/// or evicted.
///
/// # Examples
///
/// ```
/// use oats_containers::HeapRingBuffer;
///
/// let mut ring = HeapRingBuffer::with_capacity(3).unwrap();
/// for v in 1..=4 {
///     ring.enqueue(v);
/// }
/// assert_eq!(ring.size(), 3);
/// assert_eq!((ring[0], ring[1], ring[2]), (2, 3, 4));
/// assert_eq!(ring.dequeue(), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct RingBuffer<B> {
    backing: B,
    /// Occupied slots, `0..=capacity`.
    count: usize,
    /// Absolute slot of the oldest element, `0..capacity`.
    head: usize,
}

/// `(head + relative) % capacity` without overflowing `usize`.
///
/// Requires `head < capacity`.
#[inline]
fn wrap_slot(head: usize, relative: usize, capacity: usize) -> usize {
    let offset = relative % capacity;
    let room = capacity - head;
    if offset >= room {
        offset - room
    } else {
        head + offset
    }
}

/// Ring buffer over inline storage of `N` slots.
pub type InlineRingBuffer<T, const N: usize> = RingBuffer<FixedArray<T, N>>;

/// Ring buffer over heap storage sized at construction.
pub type HeapRingBuffer<T> = RingBuffer<DynamicArray<T>>;

impl<B: Backing> RingBuffer<B> {
    /// Create an empty ring of `capacity` slots.
    ///
    /// The capacity is forwarded to [`Backing::with_capacity`]. Returns
    /// `Err(ContainerError::ZeroCapacity)` for a capacity of 0, and
    /// whatever the backing store reports otherwise.
    pub fn with_capacity(capacity: usize) -> Result<Self, ContainerError> {
        if capacity == 0 {
            return Err(ContainerError::ZeroCapacity);
        }
        let backing = B::with_capacity(capacity)?;
        log::debug!("ring buffer created with {capacity} slots");
        Ok(Self {
            backing,
            count: 0,
            head: 0,
        })
    }

    /// Wrap an existing store. Its current slot contents are treated as
    /// vacant.
    ///
    /// Returns `Err(ContainerError::ZeroCapacity)` if the store has no
    /// slots.
    pub fn from_backing(backing: B) -> Result<Self, ContainerError> {
        if backing.capacity() == 0 {
            return Err(ContainerError::ZeroCapacity);
        }
        Ok(Self {
            backing,
            count: 0,
            head: 0,
        })
    }

    /// Number of held elements.
    pub fn size(&self) -> usize {
        self.count
    }

    /// Number of slots in the backing store.
    pub fn capacity(&self) -> usize {
        self.backing.capacity()
    }

    /// Whether the ring holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether the next enqueue will evict.
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Absolute backing slot for logical index `relative`.
    ///
    /// Always in `[0, capacity)`, for any input.
    #[inline]
    pub fn abs_index(&self, relative: usize) -> usize {
        wrap_slot(self.head, relative, self.capacity())
    }

    /// The `relative`-th oldest element, or `None` if `relative >= size()`.
    pub fn get(&self, relative: usize) -> Option<&B::Item> {
        if relative >= self.count {
            return None;
        }
        let slot = self.abs_index(relative);
        self.backing.storage().get(slot)
    }

    /// Mutable form of [`get`](Self::get).
    pub fn get_mut(&mut self, relative: usize) -> Option<&mut B::Item> {
        if relative >= self.count {
            return None;
        }
        let slot = self.abs_index(relative);
        self.backing.storage_mut().get_mut(slot)
    }

    /// Oldest element.
    pub fn front(&self) -> Option<&B::Item> {
        self.get(0)
    }

    /// Newest element.
    pub fn back(&self) -> Option<&B::Item> {
        self.count.checked_sub(1).and_then(|last| self.get(last))
    }

    /// The backing store. Slot order is absolute, not logical.
    pub fn backing(&self) -> &B {
        &self.backing
    }
}

impl<B> RingBuffer<B>
where
    B: Backing,
    B::Item: Default,
{
    /// Append `value` as the newest element.
    ///
    /// If the ring is full the oldest element is evicted first and
    /// returned. Never fails.
    pub fn enqueue(&mut self, value: B::Item) -> Option<B::Item> {
        let evicted = if self.is_full() { self.dequeue() } else { None };
        let slot = self.abs_index(self.count);
        self.backing.storage_mut()[slot] = value;
        self.count += 1;
        evicted
    }

    /// Remove and return the oldest element, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<B::Item> {
        if self.count == 0 {
            return None;
        }
        let value = std::mem::take(&mut self.backing.storage_mut()[self.head]);
        self.head = (self.head + 1) % self.capacity();
        self.count -= 1;
        Some(value)
    }

    /// Drop every held element and reset to empty.
    pub fn clear(&mut self) {
        while self.dequeue().is_some() {}
        self.head = 0;
    }
}

#[allow(unsafe_code)]
impl<B: Backing> RingBuffer<B> {
    /// The `relative`-th oldest element without an occupancy check.
    ///
    /// The modulo translation still keeps the slot inside the backing
    /// store; only the `relative < size()` check is skipped.
    ///
    /// # Safety
    ///
    /// `relative` must be less than [`size`](Self::size). Debug builds
    /// assert this.
    #[inline]
    pub unsafe fn get_unchecked(&self, relative: usize) -> &B::Item {
        debug_assert!(
            relative < self.count,
            "RingBuffer::get_unchecked: {relative} >= {}",
            self.count
        );
        let slot = self.abs_index(relative);
        // SAFETY: `abs_index` is reduced modulo capacity, and
        // `storage().len() == capacity()` is a `Backing` contract.
        unsafe { self.backing.storage().get_unchecked(slot) }
    }

    /// Mutable form of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `relative` must be less than [`size`](Self::size).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, relative: usize) -> &mut B::Item {
        debug_assert!(
            relative < self.count,
            "RingBuffer::get_unchecked_mut: {relative} >= {}",
            self.count
        );
        let slot = self.abs_index(relative);
        // SAFETY: as for `get_unchecked`.
        unsafe { self.backing.storage_mut().get_unchecked_mut(slot) }
    }
}

impl<T: Default, const N: usize> RingBuffer<FixedArray<T, N>> {
    /// Create an empty inline ring. `N == 0` is rejected at compile time.
    pub fn new() -> Self {
        const { assert!(N > 0, "InlineRingBuffer capacity must be at least 1") };
        Self {
            backing: FixedArray::new(),
            count: 0,
            head: 0,
        }
    }
}

impl<T: Default, const N: usize> Default for RingBuffer<FixedArray<T, N>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backing> Index<usize> for RingBuffer<B> {
    type Output = B::Item;

    #[inline]
    #[track_caller]
    fn index(&self, relative: usize) -> &B::Item {
        if relative >= self.count {
            index_out_of_range("RingBuffer", relative, self.count);
        }
        let slot = self.abs_index(relative);
        &self.backing.storage()[slot]
    }
}

impl<B: Backing> IndexMut<usize> for RingBuffer<B> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, relative: usize) -> &mut B::Item {
        if relative >= self.count {
            index_out_of_range("RingBuffer", relative, self.count);
        }
        let slot = self.abs_index(relative);
        &mut self.backing.storage_mut()[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents<B: Backing>(ring: &RingBuffer<B>) -> Vec<B::Item>
    where
        B::Item: Clone,
    {
        (0..ring.size()).map(|i| ring[i].clone()).collect()
    }

    #[test]
    fn wrap_slot_matches_modulo_for_small_values() {
        for capacity in 1..6 {
            for head in 0..capacity {
                for relative in 0..20 {
                    assert_eq!(
                        wrap_slot(head, relative, capacity),
                        (head + relative) % capacity
                    );
                }
            }
        }
    }

    #[test]
    fn wrap_slot_does_not_overflow_near_usize_max() {
        let capacity = usize::MAX - 1;
        let head = capacity - 1;
        assert_eq!(wrap_slot(head, 0, capacity), head);
        assert_eq!(wrap_slot(head, 1, capacity), 0);
        assert_eq!(wrap_slot(head, 3, capacity), 2);
        assert_eq!(wrap_slot(head, usize::MAX, capacity), 0);
        assert_eq!(wrap_slot(0, usize::MAX, capacity), 1);
    }

    #[test]
    fn new_ring_is_empty() {
        let ring: HeapRingBuffer<i32> = RingBuffer::with_capacity(4).unwrap();
        assert_eq!(ring.size(), 0);
        assert_eq!(ring.capacity(), 4);
        assert!(ring.is_empty());
        assert!(!ring.is_full());
        assert!(ring.front().is_none());
        assert!(ring.back().is_none());
    }

    #[test]
    fn zero_capacity_rejected() {
        let result: Result<HeapRingBuffer<i32>, _> = RingBuffer::with_capacity(0);
        assert!(matches!(result, Err(ContainerError::ZeroCapacity)));

        let empty: DynamicArray<i32> = DynamicArray::new(0);
        assert!(matches!(
            RingBuffer::from_backing(empty),
            Err(ContainerError::ZeroCapacity)
        ));
    }

    #[test]
    fn inline_capacity_mismatch_rejected() {
        let result: Result<InlineRingBuffer<i32, 4>, _> = RingBuffer::with_capacity(3);
        assert_eq!(
            result.unwrap_err(),
            ContainerError::CapacityMismatch {
                requested: 3,
                fixed: 4
            }
        );
    }

    #[test]
    fn enqueue_past_capacity_evicts_oldest() {
        let mut ring: HeapRingBuffer<i32> = RingBuffer::with_capacity(3).unwrap();
        assert_eq!(ring.enqueue(1), None);
        assert_eq!(ring.enqueue(2), None);
        assert_eq!(ring.enqueue(3), None);
        assert!(ring.is_full());
        assert_eq!(ring.enqueue(4), Some(1));
        assert_eq!(ring.size(), 3);
        assert_eq!(contents(&ring), vec![2, 3, 4]);
    }

    #[test]
    fn inline_ring_behaves_like_heap_ring() {
        let mut inline: InlineRingBuffer<i32, 3> = InlineRingBuffer::new();
        let mut heap: HeapRingBuffer<i32> = RingBuffer::with_capacity(3).unwrap();
        for v in 0..10 {
            assert_eq!(inline.enqueue(v), heap.enqueue(v));
            if v % 3 == 0 {
                assert_eq!(inline.dequeue(), heap.dequeue());
            }
        }
        assert_eq!(contents(&inline), contents(&heap));
    }

    #[test]
    fn dequeue_returns_fifo_order() {
        let mut ring: InlineRingBuffer<u32, 4> = InlineRingBuffer::new();
        ring.enqueue(10);
        ring.enqueue(20);
        ring.enqueue(30);
        assert_eq!(ring.dequeue(), Some(10));
        ring.enqueue(40);
        ring.enqueue(50);
        assert_eq!(ring.dequeue(), Some(20));
        assert_eq!(ring.dequeue(), Some(30));
        assert_eq!(ring.dequeue(), Some(40));
        assert_eq!(ring.dequeue(), Some(50));
        assert_eq!(ring.dequeue(), None);
    }

    #[test]
    fn dequeue_on_empty_leaves_state_intact() {
        let mut ring: InlineRingBuffer<u32, 2> = InlineRingBuffer::new();
        assert_eq!(ring.dequeue(), None);
        assert_eq!(ring.size(), 0);
        ring.enqueue(1);
        assert_eq!(ring[0], 1);
    }

    #[test]
    fn index_follows_head_after_wrap() {
        let mut ring: InlineRingBuffer<i32, 4> = InlineRingBuffer::new();
        for v in 0..6 {
            ring.enqueue(v);
        }
        // Slots: [4, 5, 2, 3], head at 2.
        assert_eq!(ring.backing().as_slice(), &[4, 5, 2, 3]);
        assert_eq!(ring.abs_index(0), 2);
        assert_eq!(ring.abs_index(3), 1);
        assert_eq!(contents(&ring), vec![2, 3, 4, 5]);
        assert_eq!(ring.front(), Some(&2));
        assert_eq!(ring.back(), Some(&5));
    }

    #[test]
    fn index_mut_writes_logical_slot() {
        let mut ring: InlineRingBuffer<i32, 3> = InlineRingBuffer::new();
        for v in 0..5 {
            ring.enqueue(v);
        }
        ring[0] = 100;
        assert_eq!(ring.dequeue(), Some(100));
        if let Some(v) = ring.get_mut(1) {
            *v = -1;
        }
        assert_eq!(contents(&ring), vec![3, -1]);
    }

    #[test]
    #[should_panic(expected = "index 2 out of range for RingBuffer of length 2")]
    fn index_past_count_panics() {
        let mut ring: InlineRingBuffer<i32, 4> = InlineRingBuffer::new();
        ring.enqueue(1);
        ring.enqueue(2);
        let _ = ring[2];
    }

    #[test]
    fn get_past_count_is_none() {
        let mut ring: HeapRingBuffer<i32> = RingBuffer::with_capacity(4).unwrap();
        ring.enqueue(1);
        assert_eq!(ring.get(0), Some(&1));
        assert_eq!(ring.get(1), None);
    }

    #[test]
    #[allow(unsafe_code)]
    fn unchecked_access_within_count() {
        let mut ring: InlineRingBuffer<i32, 2> = InlineRingBuffer::new();
        for v in 0..3 {
            ring.enqueue(v);
        }
        // SAFETY: size() == 2.
        unsafe {
            *ring.get_unchecked_mut(1) += 10;
            assert_eq!(*ring.get_unchecked(0), 1);
            assert_eq!(*ring.get_unchecked(1), 12);
        }
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut ring: HeapRingBuffer<String> = RingBuffer::with_capacity(3).unwrap();
        for s in ["a", "b", "c", "d"] {
            ring.enqueue(s.to_string());
        }
        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.abs_index(0), 0);
        assert!(ring.backing().storage().iter().all(String::is_empty));
        ring.enqueue("e".to_string());
        assert_eq!(ring[0], "e");
    }

    #[test]
    fn capacity_one_always_holds_latest() {
        let mut ring: InlineRingBuffer<i32, 1> = InlineRingBuffer::new();
        assert_eq!(ring.enqueue(1), None);
        assert_eq!(ring.enqueue(2), Some(1));
        assert_eq!(ring.enqueue(3), Some(2));
        assert_eq!(ring[0], 3);
        assert_eq!(ring.size(), 1);
    }

    #[test]
    fn from_backing_ignores_existing_slots() {
        let backing = FixedArray::from_array([7, 8, 9]);
        let mut ring = RingBuffer::from_backing(backing).unwrap();
        assert!(ring.is_empty());
        ring.enqueue(1);
        assert_eq!(ring[0], 1);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::VecDeque;

        proptest! {
            #[test]
            fn eviction_keeps_last_capacity_values(
                capacity in 1usize..16,
                values in proptest::collection::vec(any::<i32>(), 0..64),
            ) {
                let mut ring: HeapRingBuffer<i32> = RingBuffer::with_capacity(capacity).unwrap();
                for &v in &values {
                    ring.enqueue(v);
                }
                let keep = values.len().min(capacity);
                let expected = &values[values.len() - keep..];
                prop_assert_eq!(ring.size(), keep);
                for (i, &v) in expected.iter().enumerate() {
                    prop_assert_eq!(ring[i], v);
                }
            }

            #[test]
            fn matches_bounded_deque_model(
                capacity in 1usize..8,
                ops in proptest::collection::vec(proptest::option::of(any::<i16>()), 0..100),
            ) {
                let mut ring: HeapRingBuffer<i16> = RingBuffer::with_capacity(capacity).unwrap();
                let mut model: VecDeque<i16> = VecDeque::new();
                for op in ops {
                    match op {
                        Some(v) => {
                            let evicted = ring.enqueue(v);
                            let expected = if model.len() == capacity {
                                model.pop_front()
                            } else {
                                None
                            };
                            model.push_back(v);
                            prop_assert_eq!(evicted, expected);
                        }
                        None => {
                            prop_assert_eq!(ring.dequeue(), model.pop_front());
                        }
                    }
                    prop_assert_eq!(ring.size(), model.len());
                    for i in 0..ring.size() {
                        prop_assert!(ring.abs_index(i) < capacity);
                        prop_assert_eq!(ring[i], model[i]);
                    }
                }
            }
        }
    }
}
