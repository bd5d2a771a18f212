//! Glint Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for spheres with diffuse, metal and glass
//! materials. Intersection is a linear scan; every random draw comes from a
//! caller-supplied generator.

mod camera;
mod config;
mod hittable;
mod material;
pub mod output;
mod renderer;
mod scene;
mod sphere;

pub use camera::Camera;
pub use config::{CameraConfig, ConfigError, RenderConfig};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{reflectance, Material, MaterialArena, MaterialId, ScatterResult};
pub use output::OutputError;
pub use renderer::{render, render_pixel, ray_color, sky_gradient, ImageBuffer, EPSILON, SKY_BLUE};
pub use scene::{random_scene, Scene};
pub use sphere::Sphere;

/// Re-export the math types from glint_math
pub use glint_math::{Color, Interval, Point3, Ray, Vec3};
