use crate::geometry::Ray;
use crate::math::*;

/// Pinhole camera looking from `origin` towards `look_at`.
///
/// The image plane sits at distance 1 along the view direction and spans one unit
/// vertically, so the horizontal field of view follows the image aspect ratio.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    pub look_at: Vec3,
    pub v_up: Vec3,
    // camera basis expressed in world space
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Camera {
    pub fn new(look_from: Vec3, look_at: Vec3, v_up: Vec3) -> Camera {
        let w = (look_at - look_from).normalized();
        let u = v_up.cross(w).normalized();
        let v = w.cross(u).normalized();
        if !(u.is_finite() && v.is_finite() && w.is_finite()) {
            warn!(
                "degenerate camera basis for look_from {:?}, look_at {:?}, v_up {:?}",
                look_from, look_at, v_up
            );
        }
        debug!("camera basis u = {:?}, v = {:?}, w = {:?}", u, v, w);
        Camera {
            origin: look_from,
            look_at,
            v_up,
            u,
            v,
            w,
        }
    }

    /// Maps a camera space vector (x right, y up, z forward) into world space.
    pub fn camera_to_world(&self, direction: Vec3) -> Vec3 {
        self.u * direction.x + self.v * direction.y + self.w * direction.z
    }

    /// Ray through pixel `(x, y)` of a `width` by `height` image, with `y` pointing up.
    /// The direction is not normalized.
    pub fn get_ray(&self, x: usize, y: usize, width: usize, height: usize) -> Ray {
        let pixel = Vec2::new(x as Float, y as Float);
        let center = Vec2::new(width as Float, height as Float) / 2.0;
        let camera_direction = Vec3::from_vec2((pixel - center) / height as Float, 1.0);
        Ray::new(self.origin, self.camera_to_world(camera_direction))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(Vec3::new(0.0, 1.0, -3.0), Vec3::ZERO, Vec3::Y)
    }
}
