mod procedural;

pub use procedural::{populate, ProceduralSettings};

use crate::geometry::{Ray, Sphere};
use crate::hittable::{HitRecord, Hittable};
use crate::materials::{Light, Material};
use crate::math::*;

/// Ordered sphere list plus the light set. Built once during setup and only borrowed afterwards.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        if spheres.is_empty() {
            warn!("constructing a scene with no spheres, every ray will miss");
        }
        Scene { spheres, lights }
    }

    pub fn push(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.push(sphere);
        self
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Nearest intersection over all spheres, `None` if the ray escapes.
    pub fn intersect(&self, ray: Ray) -> Option<HitRecord> {
        self.hit(ray, 0.0, INFINITY)
    }
}

/// The single ground sphere lit by one white light, as used when no scene file is given.
pub fn default_scene() -> Scene {
    Scene::new(
        vec![Sphere::new(
            99999.0,
            Vec3::new(0.0, -99999.0, 0.0),
            Material::default(),
        )],
        vec![Light::new(Vec3::new(1.0, -0.4, 0.7), Vec3::ONE)],
    )
}

impl Hittable for Scene {
    fn hit(&self, r: Ray, t0: Float, t1: Float) -> Option<HitRecord> {
        let mut closest_so_far: Float = t1;
        let mut hit_record: Option<HitRecord> = None;
        for sphere in &self.spheres {
            // only strictly closer hits replace the current one, so the first sphere wins ties
            if let Some(hit) = sphere.hit(r, t0, closest_so_far) {
                closest_so_far = hit.time;
                hit_record = Some(hit);
            }
        }
        hit_record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Material {
        Material::diffuse(Vec3::new(1.0, 0.0, 0.0), 10.0)
    }

    fn blue() -> Material {
        Material::diffuse(Vec3::new(0.0, 0.0, 1.0), 10.0)
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::default();
        assert!(scene
            .intersect(Ray::new(Vec3::ZERO, Vec3::Z))
            .is_none());
    }

    #[test]
    fn test_nearest_of_overlapping_spheres() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z);
        // far sphere listed first so the scan has to replace an existing hit
        let scene = Scene::default()
            .with_sphere(Sphere::new(1.0, Vec3::new(0.0, 0.0, 0.5), blue()))
            .with_sphere(Sphere::new(1.0, Vec3::ZERO, red()));
        let hit = scene.intersect(ray).unwrap();
        assert_eq!(hit.time, 9.0);
        assert_eq!(hit.material, red());

        let reversed = Scene::default()
            .with_sphere(Sphere::new(1.0, Vec3::ZERO, red()))
            .with_sphere(Sphere::new(1.0, Vec3::new(0.0, 0.0, 0.5), blue()));
        assert_eq!(reversed.intersect(ray).unwrap().material, red());
    }

    #[test]
    fn test_equal_distance_first_sphere_wins() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z);
        let scene = Scene::default()
            .with_sphere(Sphere::new(1.0, Vec3::ZERO, red()))
            .with_sphere(Sphere::new(1.0, Vec3::ZERO, blue()));
        assert_eq!(scene.intersect(ray).unwrap().material, red());
    }

    #[test]
    fn test_never_returns_hit_behind_origin() {
        let scene = Scene::default()
            .with_sphere(Sphere::new(1.0, Vec3::new(0.0, 0.0, -5.0), red()))
            .with_sphere(Sphere::new(1.0, Vec3::new(0.0, 0.0, 5.0), blue()));
        let hit = scene.intersect(Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
        assert!(hit.time >= 0.0);
        assert_eq!(hit.material, blue());
    }

    #[test]
    fn test_default_scene() {
        let scene = default_scene();
        assert_eq!(scene.spheres.len(), 1);
        assert_eq!(scene.lights.len(), 1);
        let down = Ray::new(Vec3::new(0.0, 1.0, 0.0), -Vec3::Y);
        let hit = scene.intersect(down).unwrap();
        assert!((hit.time - 1.0).abs() < 1e-6);
    }
}
