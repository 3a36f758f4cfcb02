use crate::math::*;

use super::Tonemapper;

/// Scales by `exposure` and clips to `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Clamp {
    exposure: Float,
}

impl Clamp {
    pub fn new(exposure: Float) -> Self {
        Self { exposure }
    }
}

impl Tonemapper for Clamp {
    fn map(&self, color: Vec3) -> Vec3 {
        (self.exposure * color).map(|c| c.clamp(0.0, 1.0))
    }

    fn get_name(&self) -> &str {
        "clamp"
    }
}
