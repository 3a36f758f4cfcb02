pub mod cameras;
pub mod config;
pub mod tonemap;

pub use cameras::{cameras_for, parse_config_and_cameras};
pub use config::{Config, RenderSettings, TOMLConfig};
pub use tonemap::parse_tonemapper;

use crate::geometry::Sphere;
use crate::materials::{Light, Material};
use crate::math::*;
use crate::scene::{populate, ProceduralSettings, Scene};

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct LightData {
    /// points from the light into the scene, need not be normalized
    pub direction: Vec3,
    pub color: Vec3,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SphereData {
    pub center: Vec3,
    pub radius: Float,
    /// name of an entry in the scene's material library
    pub material: String,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct SceneData {
    #[serde(default)]
    pub lights: Vec<LightData>,
    #[serde(default)]
    pub materials: HashMap<String, Material>,
    #[serde(default)]
    pub spheres: Vec<SphereData>,
    pub procedural: Option<ProceduralSettings>,
}

fn load_arbitrary<T>(filepath: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    info!("loading file at {}", filepath.display());
    let input = fs::read_to_string(filepath)
        .with_context(|| format!("failed to read {}", filepath.display()))?;
    info!("done: {} bytes", input.len());

    let data: T = toml::from_str(&input)
        .with_context(|| format!("failed to parse {}", filepath.display()))?;
    Ok(data)
}

pub fn get_settings(filepath: impl AsRef<Path>) -> anyhow::Result<TOMLConfig> {
    let settings: TOMLConfig = load_arbitrary(filepath.as_ref())?;
    if settings.render_settings.is_empty() {
        warn!("config has no render settings, nothing will be rendered");
    }
    Ok(settings)
}

pub fn load_scene(filepath: impl AsRef<Path>) -> anyhow::Result<SceneData> {
    load_arbitrary(filepath.as_ref())
}

fn validate_procedural(settings: &ProceduralSettings) -> anyhow::Result<()> {
    let (low, high) = settings.radius_range;
    if !(low > 0.0 && low <= high && high.is_finite()) {
        bail!(
            "procedural radius_range {:?} must be positive and ordered",
            settings.radius_range
        );
    }
    let (low, high) = settings.spec_power_range;
    if !(low <= high && low.is_finite() && high.is_finite()) {
        bail!(
            "procedural spec_power_range {:?} is not an ordered range",
            settings.spec_power_range
        );
    }
    if settings.x_range.0 > settings.x_range.1 || settings.z_range.0 > settings.z_range.1 {
        bail!(
            "procedural grid ranges {:?} and {:?} must be ordered",
            settings.x_range,
            settings.z_range
        );
    }
    if !(0.0..=1.0).contains(&settings.mirror_probability) {
        bail!(
            "procedural mirror_probability {} is outside [0, 1]",
            settings.mirror_probability
        );
    }
    if !(settings.max_displacement >= 0.0 && settings.max_displacement.is_finite()) {
        bail!("procedural max_displacement {} is invalid", settings.max_displacement);
    }
    Ok(())
}

/// Validates scene data and builds the scene, appending procedural spheres last.
pub fn construct_scene(data: SceneData) -> anyhow::Result<Scene> {
    let mut lights = Vec::with_capacity(data.lights.len());
    for (i, light) in data.lights.iter().enumerate() {
        let Some(direction) = light.direction.try_normalized() else {
            bail!("light {} has a degenerate direction {:?}", i, light.direction);
        };
        lights.push(Light {
            direction,
            color: light.color,
        });
    }
    if lights.is_empty() {
        warn!("scene has no lights, surfaces will only receive ambient light");
    }

    let mut spheres = Vec::with_capacity(data.spheres.len());
    for (i, sphere) in data.spheres.iter().enumerate() {
        let Some(material) = data.materials.get(&sphere.material) else {
            bail!("sphere {} references unknown material {:?}", i, sphere.material);
        };
        if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
            bail!("sphere {} has invalid radius {}", i, sphere.radius);
        }
        spheres.push(Sphere::new(sphere.radius, sphere.center, *material));
    }

    let mut scene = Scene::new(spheres, lights);
    if let Some(procedural) = &data.procedural {
        validate_procedural(procedural)?;
        populate(&mut scene, procedural);
    }
    info!(
        "constructed scene with {} spheres and {} lights",
        scene.spheres.len(),
        scene.lights.len()
    );
    Ok(scene)
}

pub fn construct_scene_from_file(scene_file: impl AsRef<Path>) -> anyhow::Result<Scene> {
    let path = scene_file.as_ref();
    let data = load_scene(path)
        .inspect_err(|e| error!("failed to load scene {}: {:#}", path.display(), e))?;
    construct_scene(data)
}
