//! Band-parallel render loop.

use std::any::Any;
use std::ops::Range;
use std::thread;
use std::time::Instant;

use log::{debug, info};
use thiserror::Error;

use crate::camera::Camera;
use crate::params::{ParamsError, RenderParams};
use crate::sampler::Sampler;
use crate::scene::Scene;
use crate::sink::PixelSink;
use crate::tracer::trace;
use crate::Color;
use opal_math::{Ray, Vec3};

/// Flat light added to every channel after averaging, before the 8-bit clamp.
pub const AMBIENT_LIGHT: f64 = 20.0;

/// Errors surfaced by [`render`].
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render parameters: {0}")]
    Config(#[from] ParamsError),
    #[error("failed to spawn render worker {index}")]
    Spawn {
        index: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("render worker {index} panicked: {message}")]
    Worker { index: usize, message: String },
}

/// One contiguous run of image rows assigned to a single worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    pub index: usize,
    pub start: u32,
    pub end: u32,
}

impl Band {
    #[inline]
    pub fn rows(&self) -> Range<u32> {
        self.start..self.end
    }
}

/// Split `height` rows into up to `threads` disjoint bands covering the image.
///
/// Every row lands in exactly one band. When there are more threads than rows
/// the surplus threads simply get no band.
pub fn partition_bands(height: u32, threads: usize) -> Vec<Band> {
    let rows_per_band = height.div_ceil(threads as u32).max(1);
    let mut bands = Vec::new();
    let mut start = 0;
    while start < height {
        let end = (start + rows_per_band).min(height);
        bands.push(Band {
            index: bands.len(),
            start,
            end,
        });
        start = end;
    }
    bands
}

/// Render `scene` through `params` into `sink`, returning the elapsed seconds.
///
/// The image is split into row bands, one worker thread per band. Each band
/// runs its own sampler seeded from `params.seed` and the band index, so a
/// given parameter set always produces the same image no matter how the
/// threads interleave.
pub fn render(
    params: &RenderParams,
    scene: &Scene,
    sink: &dyn PixelSink,
) -> Result<f64, RenderError> {
    params.validate()?;

    let camera = Camera::new(params.width, params.height);
    let bands = partition_bands(params.height, params.threads);
    info!(
        "rendering {}x{} at {} spp, depth {}, {} band(s)",
        params.width,
        params.height,
        params.samples_per_pixel,
        params.max_depth,
        bands.len()
    );

    let start = Instant::now();
    thread::scope(|s| {
        let mut handles = Vec::with_capacity(bands.len());
        let mut spawn_failure = None;
        for band in &bands {
            let band = *band;
            let builder = thread::Builder::new().name(format!("render-band-{}", band.index));
            match builder.spawn_scoped(s, move || render_band(band, params, scene, camera, sink)) {
                Ok(handle) => handles.push((band.index, handle)),
                Err(source) => {
                    spawn_failure = Some(RenderError::Spawn {
                        index: band.index,
                        source,
                    });
                    break;
                }
            }
        }

        // Join everything before reporting so no worker outlives the error.
        let mut worker_failure = None;
        for (index, handle) in handles {
            if let Err(payload) = handle.join() {
                if worker_failure.is_none() {
                    worker_failure = Some(RenderError::Worker {
                        index,
                        message: panic_message(payload),
                    });
                }
            }
        }

        match spawn_failure.or(worker_failure) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    })?;

    let elapsed = start.elapsed().as_secs_f64();
    info!("render finished in {elapsed:.2}s");
    Ok(elapsed)
}

fn render_band(
    band: Band,
    params: &RenderParams,
    scene: &Scene,
    camera: Camera,
    sink: &dyn PixelSink,
) {
    let mut sampler = Sampler::new(params.seed.wrapping_add(band.index as u64));
    for y in band.rows() {
        for x in 0..params.width {
            let mut sum = Color::ZERO;
            for _ in 0..params.samples_per_pixel {
                let mut direction = camera.view_direction(x as f64, y as f64);
                direction.x += sampler.uniform() / 1000.0;
                direction.y += sampler.uniform() / 1000.0;
                let ray = Ray::new(Vec3::ZERO, direction);
                sum += trace(&ray, scene, 0, params.max_depth, &mut sampler);
            }
            sink.set_pixel(x, y, finalize_pixel(sum, params.samples_per_pixel));
        }
    }
    debug!("band {} done (rows {}..{})", band.index, band.start, band.end);
}

fn finalize_pixel(sum: Color, samples: u32) -> [u8; 3] {
    let mean = sum / samples as f64 + Color::splat(AMBIENT_LIGHT);
    [
        mean.x.clamp(0.0, 255.0) as u8,
        mean.y.clamp(0.0, 255.0) as u8,
        mean.z.clamp(0.0, 255.0) as u8,
    ]
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast_ref::<&'static str>() {
        Some(message) => (*message).to_string(),
        None => match payload.downcast_ref::<String>() {
            Some(message) => message.clone(),
            None => "unknown panic".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{MaterialKind, Primitive, Surface};
    use crate::scene::reference_scene;
    use crate::sink::PixelBuffer;

    #[test]
    fn test_partition_covers_rows_exactly() {
        let bands = partition_bands(64, 4);
        assert_eq!(bands.len(), 4);
        assert_eq!(bands[0].rows(), 0..16);
        assert_eq!(bands[3].rows(), 48..64);

        let ragged = partition_bands(7, 3);
        let spans: Vec<(u32, u32)> = ragged.iter().map(|b| (b.start, b.end)).collect();
        assert_eq!(spans, vec![(0, 3), (3, 6), (6, 7)]);
    }

    #[test]
    fn test_partition_with_more_threads_than_rows() {
        let bands = partition_bands(5, 8);
        assert_eq!(bands.len(), 5);
        for (i, band) in bands.iter().enumerate() {
            assert_eq!(band.index, i);
            assert_eq!(band.rows().len(), 1);
        }
    }

    #[test]
    fn test_partition_of_empty_image() {
        assert!(partition_bands(0, 4).is_empty());
    }

    #[test]
    fn test_rejects_zero_width() {
        let params = RenderParams {
            width: 0,
            ..RenderParams::default()
        };
        let scene = Scene::new();
        let buffer = PixelBuffer::new(1, 1);
        let err = render(&params, &scene, &buffer).unwrap_err();
        assert!(matches!(err, RenderError::Config(ParamsError::ZeroWidth)));
    }

    #[test]
    fn test_empty_scene_settles_at_ambient_floor() {
        let params = RenderParams {
            width: 4,
            height: 4,
            samples_per_pixel: 1,
            max_depth: 0,
            threads: 1,
            seed: 0,
        };
        let scene = Scene::new();
        let buffer = PixelBuffer::new(params.width, params.height);
        render(&params, &scene, &buffer).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(buffer.get(x, y), [20, 20, 20]);
            }
        }
    }

    #[test]
    fn test_bright_emitter_saturates_channels() {
        let mut scene = Scene::new();
        // Camera sits inside the emitting shell, so every ray hits it.
        scene.add(Primitive::sphere(
            Vec3::ZERO,
            100.0,
            Surface::new(Color::new(1.0, 1.0, 1.0), 200.0, MaterialKind::Diffuse),
        ));

        let params = RenderParams {
            width: 2,
            height: 2,
            samples_per_pixel: 1,
            max_depth: 0,
            threads: 1,
            seed: 0,
        };
        let buffer = PixelBuffer::new(params.width, params.height);
        render(&params, &scene, &buffer).unwrap();
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(buffer.get(x, y), [255, 255, 255]);
            }
        }
    }

    #[test]
    fn test_single_thread_render_is_reproducible() {
        let params = RenderParams {
            width: 64,
            height: 64,
            samples_per_pixel: 4,
            max_depth: 4,
            threads: 1,
            seed: 0,
        };
        let scene = reference_scene();
        let first = PixelBuffer::new(params.width, params.height);
        let second = PixelBuffer::new(params.width, params.height);

        let elapsed = render(&params, &scene, &first).unwrap();
        render(&params, &scene, &second).unwrap();

        assert!(elapsed >= 0.0);
        assert_eq!(first.to_rgb_bytes(), second.to_rgb_bytes());
    }

    #[test]
    fn test_band_seeds_make_threaded_render_deterministic() {
        let params = RenderParams {
            width: 16,
            height: 16,
            samples_per_pixel: 2,
            max_depth: 3,
            threads: 3,
            seed: 7,
        };
        let scene = reference_scene();
        let first = PixelBuffer::new(params.width, params.height);
        let second = PixelBuffer::new(params.width, params.height);

        render(&params, &scene, &first).unwrap();
        render(&params, &scene, &second).unwrap();

        assert_eq!(first.to_rgb_bytes(), second.to_rgb_bytes());
    }

    struct PanicSink;

    impl PixelSink for PanicSink {
        fn set_pixel(&self, _x: u32, _y: u32, _rgb: [u8; 3]) {
            panic!("sink rejected pixel");
        }
    }

    #[test]
    fn test_worker_panic_is_reported() {
        let params = RenderParams {
            width: 2,
            height: 2,
            samples_per_pixel: 1,
            max_depth: 0,
            threads: 1,
            seed: 0,
        };
        let scene = Scene::new();
        let err = render(&params, &scene, &PanicSink).unwrap_err();
        match err {
            RenderError::Worker { index, message } => {
                assert_eq!(index, 0);
                assert!(message.contains("sink rejected pixel"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
