mod whitted;

pub use whitted::WhittedIntegrator;

use crate::geometry::Ray;
use crate::math::*;

use serde::Deserialize;

/// How the shading loop combines several lights.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum LightAccumulation {
    /// Each light replaces the running color, so only the last light survives.
    /// Shadow attenuation still applies to that light. Matches the reference renders.
    #[default]
    Overwrite,
    /// Each light's (possibly shadowed) contribution is added.
    Sum,
}

/// Largest `max_depth` accepted from a config file.
pub const MAX_DEPTH_LIMIT: u16 = 64;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct IntegratorSettings {
    /// deepest bounce that is still traced; deeper calls return black
    pub max_depth: u16,
    /// offset along the normal for shadow and reflection ray origins
    pub bias: Float,
    pub shadow_attenuation: Float,
    pub ambient: Float,
    pub sky_color: Vec3,
    pub light_accumulation: LightAccumulation,
}

impl Default for IntegratorSettings {
    fn default() -> Self {
        IntegratorSettings {
            max_depth: 3,
            bias: 0.01,
            shadow_attenuation: 0.3,
            ambient: 0.01,
            sky_color: Vec3::new(0.23, 0.30, 1.0),
            light_accumulation: LightAccumulation::Overwrite,
        }
    }
}

pub trait SamplerIntegrator {
    /// Linear color seen along a camera ray.
    fn color(&self, camera_ray: Ray) -> Vec3;
}
