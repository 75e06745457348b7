//! Position-based integration: Verlet stepping and Jakobsen distance
//! constraints.
//!
//! Both operate in place on caller-owned positions and work for any
//! [`Vector`] (2D or 3D). Velocity is implicit in `pos - old_pos`.

use crate::vector::Vector;

/// Advance one Verlet step of length `dt` under constant acceleration.
///
/// `pos` becomes `2 * pos - old_pos + accel * dt²` and `old_pos` takes the
/// previous `pos`.
#[inline]
pub fn verlet<V: Vector>(pos: &mut V, old_pos: &mut V, accel: V, dt: f32) {
    let next = *pos * 2.0 - *old_pos + accel * (dt * dt);
    *old_pos = *pos;
    *pos = next;
}

/// Relax a distance constraint between two points towards `rest_length`.
///
/// Each point moves half the error along the line joining them. Coincident
/// points are left untouched since no direction is defined.
#[inline]
pub fn jakobsen_satisfy<V: Vector>(x1: &mut V, x2: &mut V, rest_length: f32) {
    let delta = *x2 - *x1;
    let delta_length = delta.length();
    if delta_length <= 0.0 {
        return;
    }
    let diff = (delta_length - rest_length) / delta_length;
    let correction = delta * (0.5 * diff);
    *x1 += correction;
    *x2 -= correction;
}
