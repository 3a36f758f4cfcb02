use super::{Film, Renderer};

use crate::camera::Camera;
use crate::integrator::{SamplerIntegrator, WhittedIntegrator};
use crate::math::*;
use crate::parsing::RenderSettings;
use crate::scene::Scene;

use std::time::Instant;

/// Traces one ray per pixel, sequentially.
#[derive(Default)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }
}

impl Renderer for NaiveRenderer {
    fn render_film(&self, scene: &Scene, camera: &Camera, settings: &RenderSettings) -> Film {
        let (width, height) = (settings.resolution.width, settings.resolution.height);
        info!("starting render with film resolution {}x{}", width, height);
        let now = Instant::now();

        let integrator = WhittedIntegrator::new(scene, camera.origin, settings.integrator);
        let mut film: Film = Film::new(width, height, Vec3::ZERO);

        for (pixel_index, pixel_ref) in film.buffer.iter_mut().enumerate() {
            let y: usize = pixel_index / width;
            let x: usize = pixel_index - width * y;

            let color = integrator.color(camera.get_ray(x, y, width, height));
            debug_assert!(
                !color.is_nan(),
                "integrator returned {:?} at ({}, {})",
                color,
                x,
                y
            );
            *pixel_ref = color;
        }

        info!("took {}s", now.elapsed().as_millis() as f32 / 1000.0);
        film
    }
}
