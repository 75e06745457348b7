//! Growth configuration for heap-backed containers.

use crate::error::ContainerError;

/// How a [`DynamicArray`](crate::DynamicArray) grows when it runs out of room.
///
/// Capacity starts at `max(current, min_capacity)` and is multiplied by
/// `factor` until the request fits. Validated at construction; immutable
/// afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Multiplier applied on each growth step. Must be at least 2.
    ///
    /// Default: 2 (amortized doubling).
    factor: usize,

    /// Capacity used as the starting point when the array is empty.
    ///
    /// Default: 1. Must be at least 1, otherwise multiplication never
    /// leaves zero.
    min_capacity: usize,
}

impl GrowthPolicy {
    /// Default growth factor.
    pub const DEFAULT_FACTOR: usize = 2;

    /// Default starting capacity for an empty array.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// Plain doubling from a single slot.
    pub const DOUBLING: Self = Self {
        factor: Self::DEFAULT_FACTOR,
        min_capacity: Self::DEFAULT_MIN_CAPACITY,
    };

    /// Create a validated policy.
    ///
    /// Returns `Err(ContainerError::InvalidGrowthPolicy)` if `factor < 2`
    /// or `min_capacity == 0`.
    pub fn new(factor: usize, min_capacity: usize) -> Result<Self, ContainerError> {
        if factor < 2 || min_capacity == 0 {
            return Err(ContainerError::InvalidGrowthPolicy {
                factor,
                min_capacity,
            });
        }
        Ok(Self {
            factor,
            min_capacity,
        })
    }

    /// Multiplication factor.
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Starting capacity for an empty array.
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Smallest capacity reachable from `current` by repeated
    /// multiplication that holds at least `required` slots.
    ///
    /// Returns `current` unchanged when it already suffices.
    pub fn next_capacity(&self, current: usize, required: usize) -> Result<usize, ContainerError> {
        if required <= current {
            return Ok(current);
        }
        let mut cap = current.max(self.min_capacity);
        while cap < required {
            cap = cap
                .checked_mul(self.factor)
                .ok_or(ContainerError::CapacityOverflow {
                    requested: required,
                })?;
        }
        Ok(cap)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DOUBLING
    }
}
