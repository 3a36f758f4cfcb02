use crate::geometry::Ray;
use crate::materials::Material;
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub time: Float,
    pub point: Vec3,
    pub normal: Vec3,
    pub material: Material,
}

impl HitRecord {
    pub fn new(time: Float, point: Vec3, normal: Vec3, material: Material) -> Self {
        HitRecord {
            time,
            point,
            normal,
            material,
        }
    }

    /// Origin for secondary rays, pushed off the surface along the normal.
    pub fn offset_point(&self, bias: Float) -> Vec3 {
        self.point + bias * self.normal
    }
}

pub trait Hittable {
    /// Nearest intersection with ray parameter in `[t0, t1)`, or `None` on a miss.
    fn hit(&self, r: Ray, t0: Float, t1: Float) -> Option<HitRecord>;
}
