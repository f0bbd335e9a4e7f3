//! Pixel to view-plane mapping.

use std::f64::consts::PI;

use opal_math::Vec3;

/// Pinhole camera fixed at the origin, looking down -Z.
///
/// The horizontal half-angle is 45 degrees; the vertical half-angle scales
/// with the aspect ratio so pixels stay square.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    width: f64,
    height: f64,
    tan_x: f64,
    tan_y: f64,
}

impl Camera {
    /// Set up the mapping for an image of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        let view_x = PI / 4.0;
        let view_y = (height as f64 / width as f64) * view_x;
        Self {
            width: width as f64,
            height: height as f64,
            tan_x: view_x.tan(),
            tan_y: view_y.tan(),
        }
    }

    /// Direction from the eye through pixel (x, y) on the view plane at
    /// z = -1. Not normalized; callers jitter first and normalize when they
    /// build the ray.
    pub fn view_direction(&self, x: f64, y: f64) -> Vec3 {
        Vec3::new(
            ((2.0 * x - self.width) / self.width) * self.tan_x,
            ((2.0 * y - self.height) / self.height) * self.tan_y,
            -1.0,
        )
    }
}
