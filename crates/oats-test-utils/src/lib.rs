//! Test fixtures for Oats container development.
//!
//! Provides [`DropTracker`] / [`DropProbe`], a value type that records when
//! it is dropped, for asserting that containers release evicted, dequeued
//! and overwritten elements exactly once.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::rc::Rc;

/// Shared log of dropped probe ids.
///
/// Hand out probes with [`probe`](DropTracker::probe), move them into the
/// container under test, then inspect [`dropped`](DropTracker::dropped).
#[derive(Clone, Default)]
pub struct DropTracker {
    dropped: Rc<RefCell<Vec<u32>>>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracked value with the given id.
    pub fn probe(&self, id: u32) -> DropProbe {
        DropProbe {
            id,
            tracker: Some(Rc::clone(&self.dropped)),
        }
    }

    /// Ids of dropped probes, in drop order.
    pub fn dropped(&self) -> Vec<u32> {
        self.dropped.borrow().clone()
    }

    /// Number of tracked probes dropped so far.
    pub fn drop_count(&self) -> usize {
        self.dropped.borrow().len()
    }

    /// How many times probe `id` has been dropped.
    pub fn times_dropped(&self, id: u32) -> usize {
        self.dropped.borrow().iter().filter(|&&d| d == id).count()
    }
}

/// A value that reports its own drop to a [`DropTracker`].
///
/// `DropProbe::default()` is an untracked placeholder: containers create
/// these for vacant slots and their drops are not recorded.
#[derive(Debug, Default)]
pub struct DropProbe {
    id: u32,
    tracker: Option<Rc<RefCell<Vec<u32>>>>,
}

impl DropProbe {
    /// Id of a tracked probe, `None` for a placeholder.
    pub fn id(&self) -> Option<u32> {
        self.tracker.as_ref().map(|_| self.id)
    }
}

impl Drop for DropProbe {
    fn drop(&mut self) {
        if let Some(tracker) = self.tracker.take() {
            tracker.borrow_mut().push(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_records_drop() {
        let tracker = DropTracker::new();
        let probe = tracker.probe(3);
        assert_eq!(probe.id(), Some(3));
        assert_eq!(tracker.drop_count(), 0);
        drop(probe);
        assert_eq!(tracker.dropped(), vec![3]);
    }

    #[test]
    fn placeholder_is_not_recorded() {
        let tracker = DropTracker::new();
        let placeholder = DropProbe::default();
        assert_eq!(placeholder.id(), None);
        drop(placeholder);
        assert_eq!(tracker.drop_count(), 0);
    }

    #[test]
    fn counts_per_id() {
        let tracker = DropTracker::new();
        drop(tracker.probe(1));
        drop(tracker.probe(2));
        drop(tracker.probe(1));
        assert_eq!(tracker.times_dropped(1), 2);
        assert_eq!(tracker.times_dropped(2), 1);
    }
}
