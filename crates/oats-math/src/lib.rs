//! Vector helpers and position-based integrators for Oats clients.
//!
//! Stateless numeric routines that sit beside the containers: client code
//! keeps positions in a [`DynamicArray`] or a ring buffer of samples and
//! steps them with these functions. Vectors are [`glam::Vec2`] and
//! [`glam::Vec3`]; the [`Vector`] trait lets the integrators serve both.
//!
//! [`DynamicArray`]: https://docs.rs/oats-containers/latest/oats_containers/struct.DynamicArray.html

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod integrate;
pub mod scalar;
pub mod shape;
pub mod vector;

pub use glam::{Vec2, Vec3};
pub use integrate::{jakobsen_satisfy, verlet};
pub use scalar::{clamp, distance_1d, lerp, pow2};
pub use shape::{overlap_test, project_into_box, Circle};
pub use vector::{distance, distance_sq, lerp_vec, normalize_safe, Vector};
