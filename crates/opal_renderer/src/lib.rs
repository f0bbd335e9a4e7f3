//! Opal - CPU path tracing with fixed band scheduling.
//!
//! The render core: scene primitives and their intersection tests, a
//! Halton-driven sampler per worker, the recursive tracer, and a scheduler
//! that fans one thread out per row band and joins them all before
//! reporting. Display and persistence live behind [`PixelSink`]; the core
//! never touches a window or a file.

mod camera;
mod halton;
mod params;
mod primitive;
mod sampler;
mod scene;
mod scheduler;
mod sink;
mod tracer;

pub use camera::Camera;
pub use halton::Halton;
pub use params::{ParamsError, RenderParams};
pub use primitive::{MaterialKind, Primitive, Surface, MIN_HIT_DISTANCE};
pub use sampler::Sampler;
pub use scene::{reference_scene, Hit, Scene};
pub use scheduler::{partition_bands, render, Band, RenderError, AMBIENT_LIGHT};
pub use sink::{PixelBuffer, PixelSink};
pub use tracer::trace;

/// Re-export the math vocabulary from opal_math.
pub use opal_math::{Ray, Vec3, VecExt};

/// RGB radiance triple. Stays unclamped while paths accumulate; pixel
/// finalization clamps to displayable range.
pub type Color = Vec3;
