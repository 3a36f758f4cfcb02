use crate::camera::Camera;
use crate::integrator::MAX_DEPTH_LIMIT;
use crate::math::Vec3;

use std::collections::HashMap;

use anyhow::bail;
use serde::Deserialize;

use super::config::{Config, TOMLConfig};

#[derive(Deserialize, Clone, Debug)]
pub struct CameraSettings {
    pub name: String,
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub v_up: Option<Vec3>, // defaults to 0,1,0
}

impl Default for CameraSettings {
    fn default() -> Self {
        CameraSettings {
            name: String::from("main"),
            look_from: Vec3::new(0.0, 1.0, -3.0),
            look_at: Vec3::ZERO,
            v_up: None,
        }
    }
}

impl From<&CameraSettings> for Camera {
    fn from(settings: &CameraSettings) -> Self {
        Camera::new(
            settings.look_from,
            settings.look_at,
            settings.v_up.unwrap_or(Vec3::Y),
        )
    }
}

/// Resolves each render's `camera_id` name into an index into the returned camera list.
pub fn parse_config_and_cameras(settings: TOMLConfig) -> anyhow::Result<(Config, Vec<Camera>)> {
    let mut cameras: Vec<Camera> = Vec::new();
    let mut camera_map: HashMap<&str, Camera> = HashMap::new();

    for camera_config in &settings.cameras {
        if camera_map
            .insert(&camera_config.name, Camera::from(camera_config))
            .is_some()
        {
            warn!("camera {} defined more than once, using the last one", camera_config.name);
        }
    }

    let mut config = Config::from(settings.clone());
    for (render_settings, toml_settings) in config
        .render_settings
        .iter_mut()
        .zip(settings.render_settings.iter())
    {
        let Some(camera) = camera_map.get(toml_settings.camera_id.as_str()) else {
            bail!(
                "render settings reference unknown camera {:?}",
                toml_settings.camera_id
            );
        };
        if render_settings.integrator.max_depth > MAX_DEPTH_LIMIT {
            bail!(
                "render settings request max_depth {}, the limit is {}",
                render_settings.integrator.max_depth,
                MAX_DEPTH_LIMIT
            );
        }
        render_settings.camera_id = cameras.len();
        cameras.push(*camera);
    }
    Ok((config, cameras))
}

/// Cameras for a config that was built in code rather than parsed.
pub fn cameras_for(config: &Config) -> Vec<Camera> {
    config.cameras.iter().map(Camera::from).collect()
}
