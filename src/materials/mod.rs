use crate::math::*;

use serde::{Deserialize, Serialize};

mod light;

pub use light::Light;

/// Surface response of a sphere. The set is closed; integrators match on it exhaustively.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Material {
    /// Lambertian diffuse plus a Blinn-Phong highlight.
    Diffuse { color: Vec3, spec_power: Float },
    /// Perfect reflector. `color` is carried as data only, reflections are tinted by the
    /// direct light term instead.
    Mirror { color: Vec3 },
}

impl Material {
    pub const fn diffuse(color: Vec3, spec_power: Float) -> Self {
        Material::Diffuse { color, spec_power }
    }

    pub const fn mirror(color: Vec3) -> Self {
        Material::Mirror { color }
    }

    pub fn color(&self) -> Vec3 {
        match self {
            Material::Diffuse { color, .. } | Material::Mirror { color } => *color,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Material::Diffuse { .. } => "Diffuse",
            Material::Mirror { .. } => "Mirror",
        }
    }
}

impl Default for Material {
    // plain grey used by the ground plane
    fn default() -> Self {
        Material::diffuse(Vec3::from(0.5), 10.0)
    }
}
