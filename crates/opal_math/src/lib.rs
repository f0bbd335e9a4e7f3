//! Math types shared by the opal crates.
//!
//! Scene geometry runs in double precision end to end, so the vector
//! vocabulary is glam's f64 family.

pub use glam::DVec3;

/// The working vector type for points, directions, and radiance.
pub type Vec3 = DVec3;

mod ray;
mod vec;

pub use ray::Ray;
pub use vec::VecExt;
