use super::{IntegratorSettings, LightAccumulation, SamplerIntegrator};
use crate::geometry::Ray;
use crate::hittable::HitRecord;
use crate::materials::Material;
use crate::math::*;
use crate::scene::Scene;

/// Direct lighting with hard shadows and recursive mirror reflections.
pub struct WhittedIntegrator<'a> {
    pub scene: &'a Scene,
    /// the view vector always points at the camera, including on reflected bounces
    pub camera_origin: Vec3,
    pub settings: IntegratorSettings,
}

impl<'a> WhittedIntegrator<'a> {
    pub fn new(scene: &'a Scene, camera_origin: Vec3, settings: IntegratorSettings) -> Self {
        WhittedIntegrator {
            scene,
            camera_origin,
            settings,
        }
    }

    fn in_shadow(&self, hit: &HitRecord, to_light: Vec3) -> bool {
        let shadow_ray = Ray::new(hit.offset_point(self.settings.bias), to_light);
        self.scene.intersect(shadow_ray).is_some()
    }

    /// Direct light arriving at `hit`, with the ambient floor added.
    pub fn shade(&self, hit: &HitRecord) -> Vec3 {
        let mut color = Vec3::ZERO;
        for light in &self.scene.lights {
            let l = light.to_light();
            let v = (self.camera_origin - hit.point).normalized();
            let h = (l + v).normalized();

            let mut contribution = match hit.material {
                Material::Diffuse {
                    color: albedo,
                    spec_power,
                } => {
                    let diffuse = l.dot(hit.normal).max(0.0);
                    let specular = h.dot(hit.normal).max(0.0).powf(spec_power);
                    (diffuse * albedo + specular * Vec3::ONE) * light.color
                }
                Material::Mirror { .. } => Vec3::ONE,
            };

            match self.settings.light_accumulation {
                LightAccumulation::Overwrite => {
                    color = contribution;
                    if self.in_shadow(hit, l) {
                        color *= self.settings.shadow_attenuation;
                    }
                }
                LightAccumulation::Sum => {
                    if self.in_shadow(hit, l) {
                        contribution *= self.settings.shadow_attenuation;
                    }
                    color += contribution;
                }
            }
        }
        color + self.settings.ambient
    }

    /// Color along `ray` at bounce `depth`. Bounces past `max_depth` are black.
    pub fn trace(&self, ray: Ray, depth: u16) -> Vec3 {
        if depth > self.settings.max_depth {
            return Vec3::ZERO;
        }

        let Some(hit) = self.scene.intersect(ray) else {
            return self.settings.sky_color;
        };

        match hit.material {
            Material::Diffuse { .. } => self.shade(&hit),
            Material::Mirror { .. } => {
                let reflected = Ray::new(
                    hit.offset_point(self.settings.bias),
                    ray.direction.reflect(hit.normal),
                );
                trace!("mirror bounce at depth {} from {:?}", depth, hit.point);
                self.shade(&hit) * self.trace(reflected, depth + 1)
            }
        }
    }
}

impl SamplerIntegrator for WhittedIntegrator<'_> {
    fn color(&self, camera_ray: Ray) -> Vec3 {
        self.trace(camera_ray, 0)
    }
}
