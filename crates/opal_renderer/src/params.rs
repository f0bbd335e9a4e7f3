//! Run parameters for a render invocation.

use thiserror::Error;

/// Everything a render needs besides the scene and the sink.
///
/// One immutable value threaded through the entry point; nothing global.
#[derive(Debug, Clone, Copy)]
pub struct RenderParams {
    /// Output image width in pixels.
    pub width: u32,
    /// Output image height in pixels.
    pub height: u32,
    /// Camera rays averaged per pixel.
    pub samples_per_pixel: u32,
    /// Bounce count after which paths are cut off.
    pub max_depth: u32,
    /// Worker threads; image rows split into this many bands.
    pub threads: usize,
    /// Base seed for the per-band samplers. Same seed, same image.
    pub seed: u64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            samples_per_pixel: 30,
            max_depth: 10,
            threads: 8,
            seed: 0,
        }
    }
}

/// Configuration rejected before any work starts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    #[error("image width must be nonzero")]
    ZeroWidth,
    #[error("image height must be nonzero")]
    ZeroHeight,
    #[error("samples per pixel must be nonzero")]
    ZeroSamples,
    #[error("thread count must be nonzero")]
    ZeroThreads,
}

impl RenderParams {
    /// Check the positivity requirements. A `max_depth` of zero is legal
    /// and means primary hits only.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.width == 0 {
            return Err(ParamsError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ParamsError::ZeroHeight);
        }
        if self.samples_per_pixel == 0 {
            return Err(ParamsError::ZeroSamples);
        }
        if self.threads == 0 {
            return Err(ParamsError::ZeroThreads);
        }
        Ok(())
    }
}
