//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Bounded bounce depth (no Russian roulette)
//! - Sky gradient background
//! - Anti-aliasing via multi-sampling

use crate::{Camera, RenderConfig, Scene};
use glint_math::sampling::random_f64;
use glint_math::{unit_vector, Color, Interval, Ray};
use rand::RngCore;
use std::time::Instant;

/// Minimum hit distance, keeps scattered rays from re-hitting their origin.
pub const EPSILON: f64 = 1e-4;

/// Color at the top of the sky gradient.
pub const SKY_BLUE: Color = Color::new(0.4, 0.6, 1.0);

/// Compute the color seen by a ray.
///
/// Follows the ray through at most `depth` surface interactions, multiplying
/// in each surface's attenuation. Running out of depth or being absorbed
/// yields black; escaping the scene picks up the sky.
pub fn ray_color(ray: &Ray, scene: &Scene, depth: u32, rng: &mut dyn RngCore) -> Color {
    let mut ray = *ray;
    let mut throughput = Color::ONE;

    for _ in 0..depth {
        let Some(rec) = scene.hit(&ray, Interval::new(EPSILON, f64::INFINITY)) else {
            return throughput * sky_gradient(&ray);
        };

        let Some(material) = scene.material(rec.material) else {
            return Color::ZERO;
        };

        match material.scatter(&ray, &rec, rng) {
            Some(result) => {
                throughput *= result.attenuation;
                ray = result.scattered;
            }
            // Absorbed
            None => return Color::ZERO,
        }
    }

    // If we've exceeded the bounce limit, no more light is gathered
    Color::ZERO
}

/// Background blend from white at the horizon line to sky blue overhead.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = unit_vector(ray.direction());
    let t = 0.7 * (unit_direction.y + 1.0);
    (1.0 - t) * Color::ONE + t * SKY_BLUE
}

/// Sum of `samples_per_pixel` radiance samples for pixel (i, j).
///
/// `j` counts rows from the bottom of the image. The result is not averaged;
/// that happens when the pixel is written out.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    // Single-pixel images would otherwise divide by zero
    let u_span = config.image_width.saturating_sub(1).max(1) as f64;
    let v_span = config.image_height().saturating_sub(1).max(1) as f64;

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let u = (i as f64 + random_f64(rng)) / u_span;
        let v = (j as f64 + random_f64(rng)) / v_span;
        let ray = camera.get_ray(u, v, rng);
        pixel_color += ray_color(&ray, scene, config.max_depth, rng);
    }
    pixel_color
}

/// Accumulated render output.
///
/// Pixels hold per-pixel sample *sums*, stored row-major from the top row.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32, samples_per_pixel: u32) -> Self {
        Self {
            width,
            height,
            samples_per_pixel,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    /// Get the pixel at (x, y), y = 0 being the top row.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y), y = 0 being the top row.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Render the entire scene to an image buffer.
///
/// Scanlines are traced from the bottom of the viewport upwards and stored
/// top-to-bottom. Single-threaded: random numbers are consumed in a fixed
/// order, so a seeded generator reproduces the image exactly.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let width = config.image_width;
    let height = config.image_height();
    let mut image = ImageBuffer::new(width, height, config.samples_per_pixel);

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth
    );
    let start = Instant::now();

    for j in (0..height).rev() {
        log::debug!("Scanlines remaining: {}", j);
        let row = height - 1 - j;
        for i in 0..width {
            let color = render_pixel(camera, scene, i, j, config, rng);
            image.set(i, row, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
