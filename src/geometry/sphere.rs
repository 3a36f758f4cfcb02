use crate::geometry::{solve_quadratic, QuadraticSolution, Ray};
use crate::hittable::{HitRecord, Hittable};
use crate::materials::Material;
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: Float,
    pub origin: Vec3,
    pub material: Material,
}

impl Sphere {
    pub fn new(radius: Float, origin: Vec3, material: Material) -> Sphere {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {}", radius);
        Sphere {
            radius,
            origin,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: Ray, t0: Float, t1: Float) -> Option<HitRecord> {
        let oc: Vec3 = r.origin - self.origin;
        let a = r.direction.norm_squared();
        let b = 2.0 * r.direction.dot(oc);
        let c = oc.norm_squared() - self.radius * self.radius;

        let (root1, root2) = match solve_quadratic(a, b, c) {
            QuadraticSolution::NoRealRoots => return None,
            QuadraticSolution::Roots { root1, root2 } => (root1, root2),
        };

        // if the near root is behind the ray origin, the origin is inside the sphere
        let time = if root1 >= t0 && root1 < t1 {
            root1
        } else if root2 >= t0 && root2 < t1 {
            root2
        } else {
            return None;
        };

        let point = r.point_at_parameter(time);
        let normal = (point - self.origin).normalized();
        Some(HitRecord::new(time, point, normal, self.material))
    }
}
