//! Hittable objects and HitRecord for ray-object intersection.

use crate::{MaterialId, Sphere};
use glint_math::{Interval, Point3, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub p: Point3,
    /// Surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: MaterialId,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl HitRecord {
    /// Build a record, orienting the normal against the incoming ray.
    pub fn new(ray: &Ray, t: f64, outward_normal: Vec3, material: MaterialId) -> Self {
        let mut rec = Self {
            p: ray.at(t),
            normal: outward_normal,
            material,
            t,
            front_face: true,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Anything a ray can be tested against.
///
/// A closed set: leaf spheres and lists of hittables, which lets lists nest.
#[derive(Debug, Clone)]
pub enum Hittable {
    Sphere(Sphere),
    List(HittableList),
}

impl Hittable {
    /// Nearest intersection strictly inside `ray_t`, if any.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Hittable::Sphere(sphere) => sphere.hit(ray, ray_t),
            Hittable::List(list) => list.hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Hittable {
    fn from(sphere: Sphere) -> Self {
        Hittable::Sphere(sphere)
    }
}

impl From<HittableList> for Hittable {
    fn from(list: HittableList) -> Self {
        Hittable::List(list)
    }
}

/// A list of hittable objects.
#[derive(Debug, Clone, Default)]
pub struct HittableList {
    objects: Vec<Hittable>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: impl Into<Hittable>) {
        self.objects.push(object.into());
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over the members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Hittable> {
        self.objects.iter()
    }

    /// Closest hit across all members.
    ///
    /// Each hit shrinks the upper bound, so only strictly nearer hits replace
    /// the current one and ties go to the earlier member.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;

        for object in &self.objects {
            let closest_so_far = closest.map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval() -> Interval {
        Interval::new(1e-4, f64::INFINITY)
    }

    #[test]
    fn test_face_normal_front() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = HitRecord::new(&ray, 4.0, Vec3::Z, MaterialId(0));

        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
        assert_eq!(rec.p, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_face_normal_back() {
        // Ray travelling along the outward normal hits the back face
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let rec = HitRecord::new(&ray, 1.0, Vec3::Z, MaterialId(0));

        assert!(!rec.front_face);
        assert_eq!(rec.normal, -Vec3::Z);
    }

    #[test]
    fn test_empty_list_misses() {
        let list = HittableList::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(list.is_empty());
        assert!(list.hit(&ray, interval()).is_none());
    }

    #[test]
    fn test_list_returns_closest() {
        let mut list = HittableList::new();
        list.add(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, MaterialId(0)));
        list.add(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, MaterialId(1)));
        list.add(Sphere::new(Vec3::new(0.0, 0.0, -6.0), 1.0, MaterialId(2)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = list.hit(&ray, interval()).expect("should hit");

        assert_eq!(rec.material, MaterialId(1));
        assert!((rec.t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_list_tie_keeps_first() {
        let mut list = HittableList::new();
        list.add(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, MaterialId(7)));
        list.add(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, MaterialId(8)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = list.hit(&ray, interval()).expect("should hit");
        assert_eq!(rec.material, MaterialId(7));
    }

    #[test]
    fn test_list_respects_interval() {
        let mut list = HittableList::new();
        list.add(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, MaterialId(0)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(list.hit(&ray, Interval::new(1e-4, 1.5)).is_none());
    }

    #[test]
    fn test_nested_lists() {
        let mut inner = HittableList::new();
        inner.add(Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, MaterialId(3)));

        let mut outer = HittableList::new();
        outer.add(Sphere::new(Vec3::new(0.0, 0.0, -8.0), 1.0, MaterialId(4)));
        outer.add(inner);
        assert_eq!(outer.len(), 2);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = Hittable::from(outer)
            .hit(&ray, interval())
            .expect("should hit");
        assert_eq!(rec.material, MaterialId(3));
        assert!((rec.t - 1.5).abs() < 1e-9);
    }
}
