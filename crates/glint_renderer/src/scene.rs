//! Scene container and the procedural sphere field.

use crate::{HitRecord, Hittable, HittableList, Material, MaterialArena, MaterialId, Sphere};
use glint_math::sampling::{random_color, random_f64, random_f64_range};
use glint_math::{Color, Interval, Point3, Ray};
use rand::RngCore;

/// Everything a render needs to know about the world.
///
/// Built once up front and only read while rendering.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    materials: MaterialArena,
    world: HittableList,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a material so spheres can reference it.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.add(material)
    }

    /// Add a sphere using an already registered material.
    pub fn add_sphere(&mut self, center: Point3, radius: f64, material: MaterialId) {
        self.world.add(Sphere::new(center, radius, material));
    }

    /// Add any hittable, e.g. a nested list.
    pub fn add(&mut self, object: impl Into<Hittable>) {
        self.world.add(object);
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn materials(&self) -> &MaterialArena {
        &self.materials
    }

    pub fn world(&self) -> &HittableList {
        &self.world
    }

    /// Number of top-level objects.
    pub fn object_count(&self) -> usize {
        self.world.len()
    }

    /// Closest hit in the whole scene.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        self.world.hit(ray, ray_t)
    }
}

/// Build the random sphere field: a large ground sphere, a 22x22 grid of
/// small spheres with random materials and one big mirror in the back.
pub fn random_scene(rng: &mut dyn RngCore) -> Scene {
    let mut scene = Scene::new();

    let ground = scene.add_material(Material::lambertian(Color::new(0.5, 0.5, 0.5)));
    scene.add_sphere(Point3::new(0.0, -1000.0, 0.0), 1000.0, ground);

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random_f64(rng);
            let radius = random_f64_range(rng, 0.05, 0.2);
            let center = Point3::new(
                a as f64 + (1.0 - radius) * random_f64(rng),
                radius,
                b as f64 + (1.0 - radius) * random_f64(rng),
            );

            let material = if choose_mat < 0.85 {
                // Diffuse
                Material::lambertian(random_color(rng))
            } else if choose_mat < 0.97 {
                // Metal
                let albedo = random_color(rng);
                let fuzz = random_f64_range(rng, 0.0, 0.3);
                Material::metal(albedo, fuzz)
            } else {
                // Glass
                Material::dielectric(1.2)
            };

            let id = scene.add_material(material);
            scene.add_sphere(center, radius, id);
        }
    }

    let mirror = scene.add_material(Material::metal(Color::new(0.7, 0.6, 0.5), 0.0));
    scene.add_sphere(Point3::new(0.0, 4.0, -7.0), 4.0, mirror);

    log::info!(
        "Built random scene: {} spheres, {} materials",
        scene.object_count(),
        scene.materials().len()
    );

    scene
}
