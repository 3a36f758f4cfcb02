use crate::math::*;

/// Directional light. No position and no falloff.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    /// Unit vector pointing from the light towards the scene.
    pub direction: Vec3,
    pub color: Vec3,
}

impl Light {
    /// `direction` is normalized here, so callers may pass any nonzero vector.
    pub fn new(direction: Vec3, color: Vec3) -> Self {
        Light {
            direction: direction.normalized(),
            color,
        }
    }

    /// Unit vector from a surface point towards the light.
    pub fn to_light(&self) -> Vec3 {
        -self.direction
    }
}
