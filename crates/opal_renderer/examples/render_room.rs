//! Renders the reference room scene and saves it to PPM format.

use opal_renderer::{reference_scene, render, PixelBuffer, RenderParams};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    let params = RenderParams {
        width: 160,
        height: 120,
        samples_per_pixel: 8,
        max_depth: 6,
        threads: 4,
        seed: 0,
    };
    let scene = reference_scene();
    let buffer = PixelBuffer::new(params.width, params.height);

    println!(
        "Rendering {}x{} @ {} spp...",
        params.width, params.height, params.samples_per_pixel
    );
    let elapsed = render(&params, &scene, &buffer).expect("Failed to render");
    println!("Rendered in {:.2}s", elapsed);

    let filename = "room.ppm";
    save_ppm(&buffer, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn save_ppm(buffer: &PixelBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "255")?;

    for rgb in buffer.to_rgb_bytes().chunks(3) {
        writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
    }

    Ok(())
}
