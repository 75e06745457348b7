//! Scalar helpers.

use std::ops::Mul;

/// `p * p`.
#[inline]
pub fn pow2<T: Mul<Output = T> + Copy>(p: T) -> T {
    p * p
}

/// `(1 - t) * v0 + t * v1`. Exact at both endpoints.
#[inline]
pub fn lerp(v0: f32, v1: f32, t: f32) -> f32 {
    (1.0 - t) * v0 + t * v1
}

/// `n` limited to `[low, high]`.
///
/// Unlike [`f32::clamp`] this does not panic when `low > high`; the upper
/// bound wins.
#[inline]
pub fn clamp(n: f32, low: f32, high: f32) -> f32 {
    high.min(low.max(n))
}

/// Absolute difference between two scalars.
#[inline]
pub fn distance_1d(a: f32, b: f32) -> f32 {
    (a - b).abs()
}
