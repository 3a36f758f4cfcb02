use crate::math::*;

use super::Tonemapper;

/// Per channel `L / (1 + L)` after scaling by `exposure`.
#[derive(Clone, Debug, PartialEq)]
pub struct Reinhard {
    exposure: Float,
}

impl Reinhard {
    pub fn new(exposure: Float) -> Self {
        Self { exposure }
    }
}

impl Default for Reinhard {
    fn default() -> Self {
        Reinhard::new(1.0)
    }
}

impl Tonemapper for Reinhard {
    fn map(&self, color: Vec3) -> Vec3 {
        let l = self.exposure * color;
        l / (l + 1.0)
    }

    fn get_name(&self) -> &str {
        "reinhard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reinhard_curve() {
        let mapped = Reinhard::default().map(Vec3::new(0.0, 1.0, 3.0));
        assert_eq!(mapped, Vec3::new(0.0, 0.5, 0.75));

        let exposed = Reinhard::new(2.0).map(Vec3::from(1.0));
        assert!((exposed.x - 2.0 / 3.0).abs() < 1e-12);
    }
}
