//! Command line front end: renders the reference room scene to an image file.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use opal_renderer::{reference_scene, render, PixelBuffer, PixelSink, RenderParams};

mod cli;

use cli::Args;

/// Forwards pixels to the shared buffer while ticking the progress bar.
struct ProgressSink<'a> {
    buffer: &'a PixelBuffer,
    bar: ProgressBar,
}

impl PixelSink for ProgressSink<'_> {
    fn set_pixel(&self, x: u32, y: u32, rgb: [u8; 3]) {
        self.buffer.set_pixel(x, y, rgb);
        self.bar.inc(1);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.clone().into())
        .init();

    let params = RenderParams {
        width: args.width,
        height: args.height,
        samples_per_pixel: args.samples_per_pixel,
        max_depth: args.max_depth,
        threads: args.threads.unwrap_or_else(num_cpus::get),
        seed: args.seed,
    };
    let scene = reference_scene();
    let buffer = PixelBuffer::new(params.width, params.height);

    let bar = ProgressBar::new(params.width as u64 * params.height as u64);
    bar.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}")?);
    let sink = ProgressSink {
        buffer: &buffer,
        bar: bar.clone(),
    };

    let elapsed = render(&params, &scene, &sink)?;
    bar.finish_and_clear();
    info!(
        "rendered {}x{} at {} spp in {:.2}s",
        params.width, params.height, params.samples_per_pixel, elapsed
    );

    let img = image::RgbImage::from_raw(params.width, params.height, buffer.to_rgb_bytes())
        .context("pixel buffer did not match image dimensions")?;
    img.save(&args.output)
        .with_context(|| format!("failed to write {}", args.output))?;
    info!("wrote {}", args.output);

    Ok(())
}
