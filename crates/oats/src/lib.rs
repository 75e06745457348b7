//! Oats: capacity-managed sequence containers and simulation helpers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Oats sub-crates. For most users, adding `oats` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use oats::prelude::*;
//!
//! // Keep the last 4 positions of a particle falling under gravity.
//! let mut trail: InlineRingBuffer<Vec2, 4> = InlineRingBuffer::new();
//! let mut pos = Vec2::new(0.0, 10.0);
//! let mut old = pos;
//! for _ in 0..10 {
//!     verlet(&mut pos, &mut old, Vec2::new(0.0, -9.8), 1.0 / 60.0);
//!     trail.enqueue(pos);
//! }
//! assert_eq!(trail.size(), 4);
//! assert!(trail[3].y < trail[0].y);
//!
//! // Heap-backed storage that grows by doubling.
//! let mut bodies = DynamicArray::new(0);
//! bodies.push_back(Circle::new(Vec2::ZERO, 1.0));
//! bodies.push_back(Circle::new(Vec2::new(1.5, 0.0), 1.0));
//! assert!(bodies[0].overlaps(&bodies[1]));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`containers`] | `oats-containers` | `FixedArray`, `DynamicArray`, `RingBuffer`, `GrowthPolicy` |
//! | [`math`] | `oats-math` | vector helpers, Verlet, Jakobsen constraints, circles |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Sequence containers (`oats-containers`).
///
/// [`containers::RingBuffer`] is generic over its [`containers::Backing`]
/// store; use [`containers::InlineRingBuffer`] or
/// [`containers::HeapRingBuffer`] for the two shipped stores.
pub use oats_containers as containers;

/// Vector helpers and integrators (`oats-math`).
pub use oats_math as math;

/// Common imports for typical Oats usage.
///
/// ```rust
/// use oats::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use oats_containers::{
        Backing, ContainerError, DynamicArray, FixedArray, GrowthPolicy, HeapRingBuffer,
        InlineRingBuffer, RingBuffer,
    };

    // Math
    pub use oats_math::{jakobsen_satisfy, normalize_safe, verlet, Circle, Vec2, Vec3, Vector};
}
