// Re-export glam for convenience
pub use glam::DVec3;

/// 3D vector used for points, directions and colors alike.
pub type Vec3 = DVec3;
/// A position in world space.
pub type Point3 = DVec3;
/// Linear RGB color (components typically 0-1).
pub type Color = DVec3;

// Glint math types
mod interval;
mod ray;
pub mod sampling;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{near_zero, reflect, refract, unit_vector};
