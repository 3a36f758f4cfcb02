use crate::integrator::IntegratorSettings;
use crate::math::Float;
use crate::parsing::tonemap::TonemapSettings;

use serde::Deserialize;

use super::cameras::CameraSettings;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: 100,
            height: 100,
        }
    }
}

fn default_gamma() -> Float {
    2.2
}

fn default_output_directory() -> String {
    String::from("output")
}

fn default_camera_id() -> String {
    String::from("main")
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLRenderSettings {
    pub filename: Option<String>,
    #[serde(default = "default_output_directory")]
    pub output_directory: String,
    pub resolution: Resolution,
    #[serde(default)]
    pub integrator: IntegratorSettings,
    #[serde(default)]
    pub tonemap_settings: TonemapSettings,
    #[serde(default = "default_gamma")]
    pub gamma: Float,
    // also write the untonemapped film as linear OpenEXR
    #[serde(default)]
    pub write_exr: bool,
    #[serde(default = "default_camera_id")]
    pub camera_id: String,
}

#[derive(Clone, Debug)]
pub struct RenderSettings {
    pub filename: Option<String>,
    pub output_directory: String,
    pub resolution: Resolution,
    pub integrator: IntegratorSettings,
    pub tonemap_settings: TonemapSettings,
    pub gamma: Float,
    pub write_exr: bool,
    /// index into the camera list produced alongside this config
    pub camera_id: usize,
}

impl From<TOMLRenderSettings> for RenderSettings {
    fn from(data: TOMLRenderSettings) -> Self {
        RenderSettings {
            filename: data.filename,
            output_directory: data.output_directory,
            resolution: data.resolution,
            integrator: data.integrator,
            tonemap_settings: data.tonemap_settings,
            gamma: data.gamma,
            write_exr: data.write_exr,
            camera_id: 0,
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            filename: None,
            output_directory: default_output_directory(),
            resolution: Resolution::default(),
            integrator: IntegratorSettings::default(),
            tonemap_settings: TonemapSettings::default(),
            gamma: default_gamma(),
            write_exr: false,
            camera_id: 0,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub default_scene_file: Option<String>,
    pub cameras: Vec<CameraSettings>,
    pub render_settings: Vec<TOMLRenderSettings>,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// `None` renders the built in ground plane scene
    pub scene_file: Option<String>,
    pub cameras: Vec<CameraSettings>,
    pub render_settings: Vec<RenderSettings>,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            scene_file: data.default_scene_file,
            cameras: data.cameras,
            render_settings: data
                .render_settings
                .iter()
                .map(|e| RenderSettings::from(e.clone()))
                .collect(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scene_file: None,
            cameras: vec![CameraSettings::default()],
            render_settings: vec![RenderSettings::default()],
        }
    }
}
