//! Container error types.

use std::alloc::Layout;
use std::error::Error;
use std::fmt;

/// Errors surfaced by fallible container operations.
///
/// Only construction and growth can fail. Index violations are handled by
/// the checked accessors (`Option` / panic) and never reach this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerError {
    /// The allocator refused a growth request.
    AllocationFailed {
        /// Layout of the buffer that could not be allocated.
        layout: Layout,
    },
    /// The requested slot count does not fit in the address space, or the
    /// growth arithmetic overflowed `usize`.
    CapacityOverflow {
        /// Number of slots requested.
        requested: usize,
    },
    /// A ring buffer was asked for zero slots.
    ZeroCapacity,
    /// A fixed-size store was asked for a capacity other than its own.
    CapacityMismatch {
        /// Capacity the caller asked for.
        requested: usize,
        /// Capacity fixed by the type.
        fixed: usize,
    },
    /// A [`GrowthPolicy`](crate::GrowthPolicy) that cannot make progress.
    InvalidGrowthPolicy {
        /// Multiplication factor supplied.
        factor: usize,
        /// Minimum capacity supplied.
        min_capacity: usize,
    },
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { layout } => {
                write!(
                    f,
                    "allocation failed: {} bytes (align {})",
                    layout.size(),
                    layout.align()
                )
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} slots requested")
            }
            Self::ZeroCapacity => write!(f, "ring buffer capacity must be at least 1"),
            Self::CapacityMismatch { requested, fixed } => {
                write!(
                    f,
                    "capacity mismatch: requested {requested} slots, store is fixed at {fixed}"
                )
            }
            Self::InvalidGrowthPolicy {
                factor,
                min_capacity,
            } => {
                write!(
                    f,
                    "invalid growth policy: factor {factor} (must be >= 2), min capacity {min_capacity} (must be >= 1)"
                )
            }
        }
    }
}

impl Error for ContainerError {}

/// Panic for a checked index past the logical length.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn index_out_of_range(container: &str, index: usize, len: usize) -> ! {
    panic!("index {index} out of range for {container} of length {len}")
}

/// Escalate a failed growth in an infallible operation.
///
/// Allocator refusals go through the global allocation error handler, the
/// same way `Vec` treats them; everything else is a panic.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn growth_failed(err: ContainerError) -> ! {
    match err {
        ContainerError::AllocationFailed { layout } => std::alloc::handle_alloc_error(layout),
        other => panic!("{other}"),
    }
}
