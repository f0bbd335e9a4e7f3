//! Low-discrepancy sample sequence.
//!
//! A Halton sequence walks the radical-inverse values of 0, 1, 2, ... in a
//! fixed integer base. Successive values spread evenly over [0, 1) instead
//! of clustering the way pseudo-random draws can, which keeps diffuse
//! sampling artifacts down at low sample counts.

/// Incremental radical-inverse sequence in one base.
#[derive(Debug, Clone)]
pub struct Halton {
    value: f64,
    inv_base: f64,
}

/// Guard band keeping the carry detection stable against accumulated
/// floating-point error.
const CARRY_EPS: f64 = 1e-5;

impl Halton {
    /// Start the sequence at the radical inverse of `index`.
    pub fn new(index: u32, base: u32) -> Self {
        debug_assert!(base >= 2, "radical inverse needs base >= 2");
        let inv_base = 1.0 / base as f64;
        let mut value = 0.0;
        let mut fraction = inv_base;
        let mut i = index;
        while i > 0 {
            value += fraction * (i % base) as f64;
            i /= base;
            fraction *= inv_base;
        }
        Self { value, inv_base }
    }

    /// Advance to the next value in the sequence.
    ///
    /// Incremental radical inverse: adding `inv_base` is enough until the
    /// lowest digit would overflow; the loop finds how far the carry
    /// ripples and rolls all affected digits over at once.
    pub fn next(&mut self) {
        let remaining = 1.0 - self.value - CARRY_EPS;
        if self.inv_base < remaining {
            self.value += self.inv_base;
        } else {
            let mut h = self.inv_base;
            let mut prev;
            loop {
                prev = h;
                h *= self.inv_base;
                if h < remaining {
                    break;
                }
            }
            self.value += prev + h - 1.0;
        }
    }

    /// Current value in [0, 1).
    #[inline]
    pub fn get(&self) -> f64 {
        self.value
    }
}
