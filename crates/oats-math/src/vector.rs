//! Dimension-generic vector helpers over `glam` types.

use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use glam::{Vec2, Vec3};

/// The arithmetic the integrators need, implemented for [`Vec2`] and
/// [`Vec3`].
pub trait Vector:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
    + AddAssign
    + SubAssign
{
    /// The zero vector.
    const ZERO: Self;

    /// Dot product.
    fn dot(self, rhs: Self) -> f32;

    /// Squared Euclidean length.
    fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    fn length(self) -> f32 {
        self.length_squared().sqrt()
    }
}

impl Vector for Vec2 {
    const ZERO: Self = Vec2::ZERO;

    fn dot(self, rhs: Self) -> f32 {
        Vec2::dot(self, rhs)
    }
}

impl Vector for Vec3 {
    const ZERO: Self = Vec3::ZERO;

    fn dot(self, rhs: Self) -> f32 {
        Vec3::dot(self, rhs)
    }
}

/// `v` scaled to unit length, or zero if `v` has zero length.
pub fn normalize_safe<V: Vector>(v: V) -> V {
    let sq = v.length_squared();
    if sq > 0.0 {
        v / sq.sqrt()
    } else {
        V::ZERO
    }
}

/// Squared distance between two points.
pub fn distance_sq<V: Vector>(a: V, b: V) -> f32 {
    (a - b).length_squared()
}

/// Distance between two points.
pub fn distance<V: Vector>(a: V, b: V) -> f32 {
    distance_sq(a, b).sqrt()
}

/// Component-wise linear interpolation, `(1 - t) * a + t * b`.
pub fn lerp_vec<V: Vector>(a: V, b: V, t: f32) -> V {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_safe_of_zero_is_zero() {
        assert_eq!(normalize_safe(Vec2::ZERO), Vec2::ZERO);
        assert_eq!(normalize_safe(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn normalize_safe_yields_unit_length() {
        let n = normalize_safe(Vec3::new(3.0, 0.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < 1e-6);
        assert!((n.z - 0.8).abs() < 1e-6);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance(b, a), 5.0);
        assert_eq!(distance_sq(a, b), 25.0);
    }

    #[test]
    fn lerp_vec_endpoints() {
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(lerp_vec(a, b, 0.0), a);
        assert_eq!(lerp_vec(a, b, 1.0), b);
        assert_eq!(lerp_vec(a, b, 0.5), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn trait_length_matches_glam() {
        let v = Vec3::new(1.0, 2.0, 2.0);
        assert_eq!(Vector::length(v), 3.0);
        assert_eq!(Vector::length_squared(v), v.length_squared());
    }
}
