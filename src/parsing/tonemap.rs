use serde::Deserialize;

use crate::math::Float;
use crate::tonemap::{Clamp, Converter, Reinhard, Tonemapper};

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum TonemapSettings {
    // clamp all colors to 0 to 1, multiplying by exposure beforehand
    // (exposure defaults to 1, not changing anything)
    Clamp { exposure: Option<Float> },
    Reinhard { exposure: Option<Float> },
}

impl Default for TonemapSettings {
    fn default() -> Self {
        TonemapSettings::Reinhard { exposure: None }
    }
}

pub fn parse_tonemapper(
    settings: TonemapSettings,
    gamma: Float,
) -> (Box<dyn Tonemapper>, Converter) {
    let tonemapper: Box<dyn Tonemapper> = match settings {
        TonemapSettings::Clamp { exposure } => Box::new(Clamp::new(exposure.unwrap_or(1.0))),
        TonemapSettings::Reinhard { exposure } => Box::new(Reinhard::new(exposure.unwrap_or(1.0))),
    };
    let converter = if gamma == 1.0 {
        Converter::Linear
    } else {
        Converter::Gamma(gamma)
    };
    (tonemapper, converter)
}
