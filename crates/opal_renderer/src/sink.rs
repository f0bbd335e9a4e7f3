//! Pixel delivery out of the render core.

use std::sync::Mutex;

/// Destination for finalized pixels.
///
/// Workers on every band call this concurrently, so implementations take
/// `&self` and synchronize internally.
pub trait PixelSink: Send + Sync {
    /// Deliver the final 8-bit color of pixel (x, y).
    fn set_pixel(&self, x: u32, y: u32, rgb: [u8; 3]);
}

/// In-memory sink collecting pixels into a row-major RGB grid.
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Mutex<Vec<[u8; 3]>>,
}

impl PixelBuffer {
    /// Create a buffer of black pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: Mutex::new(vec![[0, 0, 0]; width as usize * height as usize]),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read one pixel back. Coordinates must lie inside the buffer.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let pixels = self.pixels.lock().expect("pixel buffer lock poisoned");
        pixels[(y * self.width + x) as usize]
    }

    /// Flatten to packed RGB bytes, row-major from the top-left pixel.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let pixels = self.pixels.lock().expect("pixel buffer lock poisoned");
        let mut bytes = Vec::with_capacity(pixels.len() * 3);
        for rgb in pixels.iter() {
            bytes.extend_from_slice(rgb);
        }
        bytes
    }
}

impl PixelSink for PixelBuffer {
    fn set_pixel(&self, x: u32, y: u32, rgb: [u8; 3]) {
        let mut pixels = self.pixels.lock().expect("pixel buffer lock poisoned");
        pixels[(y * self.width + x) as usize] = rgb;
    }
}
