//! Capacity-managed sequence containers for Oats.
//!
//! Three building blocks for hot paths in simulation and game code:
//!
//! ```text
//! RingBuffer<B: Backing>   circular indexing + occupancy (count, head)
//! ├── FixedArray<T, N>     inline [T; N], no allocation
//! └── DynamicArray<T>      Box<[T]> + size, amortized growth
//! ```
//!
//! `FixedArray` and `DynamicArray` are independent leaves. `RingBuffer` is
//! written once against the [`Backing`] trait and picks its store by type;
//! see [`InlineRingBuffer`] and [`HeapRingBuffer`].
//!
//! # Bounds checking
//!
//! `[]`, `get` and `get_mut` are checked against the logical length.
//! Callers that already guarantee the bound can opt into the `unsafe`
//! `get_unchecked` / `get_unchecked_mut` accessors, which skip the check
//! in release builds and assert it in debug builds.
//!
//! # Failure
//!
//! Only allocation can fail. `try_*` methods surface [`ContainerError`];
//! their infallible counterparts treat allocation failure as fatal. A full
//! ring buffer evicts its oldest element on enqueue; that is not an error.
//!
//! # Threading
//!
//! None of the containers synchronise internally. All mutation goes
//! through `&mut self`; sharing across threads needs external locking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod backing;
pub mod config;
pub mod dynamic;
pub mod error;
pub mod fixed;
pub mod grid;
pub mod ring;

// Public re-exports for the primary API surface.
pub use backing::Backing;
pub use config::GrowthPolicy;
pub use dynamic::DynamicArray;
pub use error::ContainerError;
pub use fixed::FixedArray;
pub use grid::{coords_2d, index_1d};
pub use ring::{HeapRingBuffer, InlineRingBuffer, RingBuffer};
