use super::Scene;
use crate::geometry::Sphere;
use crate::materials::Material;
use crate::math::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

/// Grid of randomly sized, coloured and displaced spheres resting on the ground plane.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ProceduralSettings {
    pub seed: u64,
    /// half open cell ranges, `x` is the outer loop
    pub x_range: (i32, i32),
    pub z_range: (i32, i32),
    pub mirror_probability: Float,
    pub spec_power_range: (Float, Float),
    pub radius_range: (Float, Float),
    pub max_displacement: Float,
}

impl Default for ProceduralSettings {
    fn default() -> Self {
        ProceduralSettings {
            seed: 39,
            x_range: (-5, 5),
            z_range: (-5, 5),
            mirror_probability: 0.2,
            spec_power_range: (1.0, 100.0),
            radius_range: (0.1, 0.5),
            max_displacement: 0.22,
        }
    }
}

// uniform in [low, high], tolerating an empty range
fn uniform(rng: &mut StdRng, (low, high): (Float, Float)) -> Float {
    low + (high - low) * rng.gen::<Float>()
}

/// Appends one sphere per grid cell. The same settings always produce the same spheres.
pub fn populate(scene: &mut Scene, settings: &ProceduralSettings) {
    let mut rng = StdRng::seed_from_u64(settings.seed);
    let displacement = (-settings.max_displacement, settings.max_displacement);
    let before = scene.spheres.len();
    for x in settings.x_range.0..settings.x_range.1 {
        for z in settings.z_range.0..settings.z_range.1 {
            let color = Vec3::new(rng.gen(), rng.gen(), rng.gen());
            let material = if rng.gen::<Float>() < settings.mirror_probability {
                Material::mirror(color)
            } else {
                Material::diffuse(color, uniform(&mut rng, settings.spec_power_range))
            };
            let radius = uniform(&mut rng, settings.radius_range);
            let center = Vec3::new(
                x as Float + uniform(&mut rng, displacement),
                radius,
                z as Float + uniform(&mut rng, displacement),
            );
            scene.push(Sphere::new(radius, center, material));
        }
    }
    info!(
        "procedurally added {} spheres with seed {}",
        scene.spheres.len() - before,
        settings.seed
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populate_is_deterministic() {
        let settings = ProceduralSettings::default();
        let mut a = Scene::default();
        let mut b = Scene::default();
        populate(&mut a, &settings);
        populate(&mut b, &settings);
        assert_eq!(a.spheres, b.spheres);
        assert_eq!(a.spheres.len(), 100);
    }

    #[test]
    fn test_spheres_rest_on_ground_inside_their_cell() {
        let settings = ProceduralSettings::default();
        let mut scene = Scene::default();
        populate(&mut scene, &settings);
        for (i, sphere) in scene.spheres.iter().enumerate() {
            let x = settings.x_range.0 + (i / 10) as i32;
            let z = settings.z_range.0 + (i % 10) as i32;
            assert!(sphere.radius >= 0.1 && sphere.radius <= 0.5);
            assert_eq!(sphere.origin.y, sphere.radius);
            assert!((sphere.origin.x - x as Float).abs() <= settings.max_displacement);
            assert!((sphere.origin.z - z as Float).abs() <= settings.max_displacement);
            if let Material::Diffuse { spec_power, .. } = sphere.material {
                assert!((1.0..=100.0).contains(&spec_power));
            }
        }
    }

    #[test]
    fn test_mirror_probability_extremes() {
        let mut all_mirrors = Scene::default();
        populate(
            &mut all_mirrors,
            &ProceduralSettings {
                mirror_probability: 1.0,
                ..Default::default()
            },
        );
        assert!(all_mirrors
            .spheres
            .iter()
            .all(|s| matches!(s.material, Material::Mirror { .. })));

        let mut no_mirrors = Scene::default();
        populate(
            &mut no_mirrors,
            &ProceduralSettings {
                mirror_probability: 0.0,
                ..Default::default()
            },
        );
        assert!(no_mirrors
            .spheres
            .iter()
            .all(|s| matches!(s.material, Material::Diffuse { .. })));
    }

    #[test]
    fn test_empty_grid() {
        let mut scene = Scene::default();
        populate(
            &mut scene,
            &ProceduralSettings {
                x_range: (0, 0),
                ..Default::default()
            },
        );
        assert!(scene.spheres.is_empty());
    }
}
