//! Benchmark profiles and demo scaffolding for the Oats containers.
//!
//! Provides a small position-based rope simulation that exercises the
//! containers the way client code does:
//!
//! - [`Rope`]: particle positions in [`DynamicArray`]s, stepped with
//!   [`verlet`] and relaxed with [`jakobsen_satisfy`];
//! - a trail of recent tip positions in an [`InlineRingBuffer`].

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use oats_containers::{DynamicArray, InlineRingBuffer};
use oats_math::{jakobsen_satisfy, project_into_box, verlet, Vec2};

/// Number of tip positions retained by [`Rope::trail`].
pub const TRAIL_LEN: usize = 32;

/// Downward acceleration applied to every free particle.
pub const GRAVITY: Vec2 = Vec2::new(0.0, -9.8);

/// A pinned rope of equally spaced particles.
///
/// Particle 0 is pinned at its start position. Every other particle falls
/// under [`GRAVITY`] and is held to its neighbours by distance constraints.
pub struct Rope {
    positions: DynamicArray<Vec2>,
    previous: DynamicArray<Vec2>,
    segment_length: f32,
    iterations: usize,
    bounds: (Vec2, Vec2),
    trail: InlineRingBuffer<Vec2, TRAIL_LEN>,
}

impl Rope {
    /// Build a horizontal rope of `particles` particles starting at `anchor`.
    ///
    /// `iterations` is the number of constraint relaxation passes per step.
    pub fn new(anchor: Vec2, particles: usize, segment_length: f32, iterations: usize) -> Self {
        let mut positions = DynamicArray::new(0);
        for i in 0..particles {
            positions.push_back(anchor + Vec2::new(i as f32 * segment_length, 0.0));
        }
        let previous = positions.clone();
        log::debug!(
            "rope: {particles} particles, capacity {}, {iterations} relaxation passes",
            positions.capacity()
        );
        Self {
            positions,
            previous,
            segment_length,
            iterations,
            bounds: (Vec2::splat(-1000.0), Vec2::splat(1000.0)),
            trail: InlineRingBuffer::new(),
        }
    }

    /// Confine particles to the box `[min, max]` after each step.
    pub fn with_bounds(mut self, min: Vec2, max: Vec2) -> Self {
        self.bounds = (min, max);
        self
    }

    /// Advance the simulation by `dt`.
    pub fn step(&mut self, dt: f32) {
        let count = self.positions.size();
        if count == 0 {
            return;
        }
        let anchor = self.positions[0];

        for i in 1..count {
            verlet(
                &mut self.positions[i],
                &mut self.previous[i],
                GRAVITY,
                dt,
            );
        }

        let (min, max) = self.bounds;
        for _ in 0..self.iterations {
            for i in 1..count {
                let mut a = self.positions[i - 1];
                let mut b = self.positions[i];
                jakobsen_satisfy(&mut a, &mut b, self.segment_length);
                self.positions[i - 1] = a;
                self.positions[i] = b;
            }
            self.positions[0] = anchor;
            for i in 1..count {
                let p = self.positions[i];
                self.positions[i] = project_into_box(p, min.x, max.x, min.y, max.y);
            }
        }

        self.trail.enqueue(self.positions[count - 1]);
    }

    /// Current particle positions.
    pub fn positions(&self) -> &[Vec2] {
        self.positions.as_slice()
    }

    /// The most recent tip positions, oldest first.
    pub fn trail(&self) -> &InlineRingBuffer<Vec2, TRAIL_LEN> {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_stays_pinned() {
        let mut rope = Rope::new(Vec2::new(0.0, 10.0), 8, 0.5, 4);
        for _ in 0..120 {
            rope.step(1.0 / 60.0);
        }
        assert_eq!(rope.positions()[0], Vec2::new(0.0, 10.0));
    }

    #[test]
    fn tip_falls_under_gravity() {
        let mut rope = Rope::new(Vec2::ZERO, 5, 1.0, 8);
        let start = rope.positions()[4];
        for _ in 0..30 {
            rope.step(1.0 / 60.0);
        }
        assert!(rope.positions()[4].y < start.y);
    }

    #[test]
    fn trail_keeps_latest_tip_positions() {
        let mut rope = Rope::new(Vec2::ZERO, 4, 1.0, 2);
        for _ in 0..(TRAIL_LEN + 10) {
            rope.step(1.0 / 60.0);
        }
        assert_eq!(rope.trail().size(), TRAIL_LEN);
        assert!(rope.trail().is_full());
        assert_eq!(rope.trail().back(), Some(&rope.positions()[3]));
    }

    #[test]
    fn bounds_confine_particles() {
        let mut rope = Rope::new(Vec2::ZERO, 6, 1.0, 4)
            .with_bounds(Vec2::new(-10.0, -2.0), Vec2::new(10.0, 2.0));
        for _ in 0..600 {
            rope.step(1.0 / 60.0);
        }
        assert!(rope.positions().iter().all(|p| p.y >= -2.0));
    }
}
