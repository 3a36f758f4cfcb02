use crate::math::*;

mod clamp;
mod reinhard;

pub use clamp::Clamp;
pub use reinhard::Reinhard;

pub trait Tonemapper {
    /// Maps an unbounded linear color into `[0, 1]` per channel.
    fn map(&self, color: Vec3) -> Vec3;
    fn get_name(&self) -> &str;
}

/// Transfer function applied after tonemapping.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Converter {
    Gamma(Float),
    Linear,
}

impl Default for Converter {
    fn default() -> Self {
        Converter::Gamma(2.2)
    }
}

impl Converter {
    pub fn transfer_function(&self, color: Vec3) -> Vec3 {
        match self {
            Converter::Gamma(gamma) => color.powf(1.0 / gamma),
            Converter::Linear => color,
        }
    }

    /// Tonemaps then encodes one linear color into 8 bit RGB.
    pub fn to_rgb8(&self, tonemapper: &dyn Tonemapper, color: Vec3) -> [u8; 3] {
        let mapped = self.transfer_function(tonemapper.map(color));
        [
            channel_to_u8(mapped.x),
            channel_to_u8(mapped.y),
            channel_to_u8(mapped.z),
        ]
    }
}

/// `floor(c * 255)` clamped to the byte range. NaN becomes 0.
pub fn channel_to_u8(c: Float) -> u8 {
    // float to int `as` casts saturate and send NaN to 0
    (c * 255.0).floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_stays_black() {
        let rgb = Converter::default().to_rgb8(&Reinhard::default(), Vec3::ZERO);
        assert_eq!(rgb, [0, 0, 0]);
    }

    #[test]
    fn test_bright_colors_stay_below_white() {
        let converter = Converter::default();
        let tonemapper = Reinhard::default();
        for value in [1.0, 10.0, 1e3, 1e6] {
            let mapped = converter.transfer_function(tonemapper.map(Vec3::from(value)));
            assert!(mapped.x < 1.0, "{} mapped to {}", value, mapped.x);
            assert!(converter.to_rgb8(&tonemapper, Vec3::from(value))[0] < 255);
        }
    }

    #[test]
    fn test_reference_encoding() {
        // 1 / (1 + 1) = 0.5, 0.5^(1/2.2) = 0.7297
        let rgb = Converter::default().to_rgb8(&Reinhard::default(), Vec3::new(1.0, 0.0, 3.0));
        assert_eq!(rgb, [186, 0, 223]);
    }

    #[test]
    fn test_channel_to_u8_clamps() {
        assert_eq!(channel_to_u8(-0.5), 0);
        assert_eq!(channel_to_u8(0.0), 0);
        assert_eq!(channel_to_u8(0.999), 254);
        assert_eq!(channel_to_u8(1.0), 255);
        assert_eq!(channel_to_u8(7.0), 255);
        assert_eq!(channel_to_u8(Float::NAN), 0);
    }

    #[test]
    fn test_linear_converter() {
        let color = Vec3::new(0.25, 0.5, 0.75);
        assert_eq!(Converter::Linear.transfer_function(color), color);
    }
}
