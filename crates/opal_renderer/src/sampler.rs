//! Per-worker sampling state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::halton::Halton;

/// Sampling state owned by one render worker.
///
/// Two Halton streams supply the hemisphere coordinates and a seeded PRNG
/// covers the radial term plus sub-pixel jitter. Both streams use base 2
/// and advance together.
pub struct Sampler {
    axis: Halton,
    angle: Halton,
    rng: SmallRng,
}

impl Sampler {
    /// Seed the sampler for one band. Equal seeds replay the exact same
    /// draw sequence.
    pub fn new(seed: u64) -> Self {
        Self {
            axis: Halton::new(0, 2),
            angle: Halton::new(0, 2),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Advance both streams and return the (axis, angle) pair for one
    /// diffuse bounce.
    pub fn next_hemisphere(&mut self) -> (f64, f64) {
        self.axis.next();
        self.angle.next();
        (self.axis.get(), self.angle.get())
    }

    /// Uniform draw in [0, 1).
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen()
    }
}
