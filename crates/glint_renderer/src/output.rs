//! Image output: plain-text PPM and 8-bit PNG.
//!
//! Both formats share one quantization: average the sample sum, gamma 2.0
//! (square root), clamp to [0, 0.999] and scale by 256, truncating.

use crate::ImageBuffer;
use glint_math::{Color, Interval};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Clamp range applied after gamma correction.
const INTENSITY: Interval = Interval::new(0.0, 0.999);

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a summed pixel color to 8-bit RGB.
pub fn color_to_rgb8(pixel_sum: Color, samples_per_pixel: u32) -> [u8; 3] {
    let scale = 1.0 / samples_per_pixel.max(1) as f64;
    let channel = |c: f64| (256.0 * INTENSITY.clamp(linear_to_gamma(scale * c))) as u8;
    [
        channel(pixel_sum.x),
        channel(pixel_sum.y),
        channel(pixel_sum.z),
    ]
}

/// Write the image as plain-text PPM (P3), top row first.
pub fn write_ppm<W: Write>(writer: &mut W, image: &ImageBuffer) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for color in &image.pixels {
        let [r, g, b] = color_to_rgb8(*color, image.samples_per_pixel);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    writer.flush()
}

/// Convert to an 8-bit RGB image for encoding.
pub fn to_rgb_image(image: &ImageBuffer) -> image::RgbImage {
    image::RgbImage::from_fn(image.width, image.height, |x, y| {
        image::Rgb(color_to_rgb8(image.get(x, y), image.samples_per_pixel))
    })
}

/// Save the image, picking the format from the file extension (`.ppm` or `.png`).
pub fn save(image: &ImageBuffer, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_ppm(&mut writer, image)?;
        }
        "png" => {
            to_rgb_image(image).save_with_format(path, image::ImageFormat::Png)?;
        }
        other => return Err(OutputError::UnsupportedFormat(other.to_string())),
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
