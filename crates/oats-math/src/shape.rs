//! 2D shapes and containment helpers.

use glam::Vec2;

use crate::scalar::{clamp, pow2};
use crate::vector::distance_sq;

/// A circle in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Circle {
    /// Centre point.
    pub origin: Vec2,
    /// Radius; expected non-negative.
    pub radius: f32,
}

impl Circle {
    /// Create a circle.
    pub const fn new(origin: Vec2, radius: f32) -> Self {
        Self { origin, radius }
    }

    /// Whether the two circles touch or intersect.
    pub fn overlaps(&self, other: &Circle) -> bool {
        overlap_test(self, other)
    }
}

/// Whether two circles touch or intersect. Tangent circles overlap.
pub fn overlap_test(left: &Circle, right: &Circle) -> bool {
    distance_sq(left.origin, right.origin) <= pow2(left.radius + right.radius)
}

/// Clamp `v` into the axis-aligned box `[x_low, x_high] × [y_low, y_high]`.
pub fn project_into_box(v: Vec2, x_low: f32, x_high: f32, y_low: f32, y_high: f32) -> Vec2 {
    Vec2::new(clamp(v.x, x_low, x_high), clamp(v.y, y_low, y_high))
}
