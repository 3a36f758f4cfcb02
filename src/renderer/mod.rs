mod naive;
mod vec2d;

pub use naive::NaiveRenderer;
pub use vec2d::Vec2D;

use crate::camera::Camera;
use crate::math::*;
use crate::parsing::{parse_tonemapper, Config, RenderSettings};
use crate::scene::Scene;
use crate::tonemap::{Converter, Tonemapper};

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};

/// Linear colors, `y = 0` is the bottom row of the image.
pub type Film = Vec2D<Vec3>;

/// 8 bit RGB pixels, row major with row 0 at the top of the image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Framebuffer {
    pub fn pixel(&self, x: usize, row: usize) -> [u8; 3] {
        let idx = (row * self.width + x) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}

/// Tonemaps and encodes a film, flipping it so the highest `y` lands in row 0.
pub fn film_to_framebuffer(
    film: &Film,
    tonemapper: &dyn Tonemapper,
    converter: Converter,
) -> Framebuffer {
    let mut data = vec![0u8; film.total_pixels() * 3];
    for y in 0..film.height {
        let row = film.height - y - 1;
        for x in 0..film.width {
            let idx = (row * film.width + x) * 3;
            data[idx..idx + 3].copy_from_slice(&converter.to_rgb8(tonemapper, film.at(x, y)));
        }
    }
    Framebuffer {
        width: film.width,
        height: film.height,
        data,
    }
}

pub fn write_png(framebuffer: &Framebuffer, png_filename: &Path) -> anyhow::Result<()> {
    let img = image::RgbImage::from_raw(
        framebuffer.width as u32,
        framebuffer.height as u32,
        framebuffer.data.clone(),
    )
    .ok_or_else(|| anyhow!("framebuffer size does not match its dimensions"))?;
    img.save(png_filename)
        .with_context(|| format!("failed to write {}", png_filename.display()))?;
    Ok(())
}

pub fn write_exr(film: &Film, exr_filename: &Path) -> anyhow::Result<()> {
    exr::prelude::write_rgb_file(exr_filename, film.width, film.height, |x, y| {
        let color = film.at(x, film.height - y - 1);
        (color.x as f32, color.y as f32, color.z as f32)
    })
    .with_context(|| format!("failed to write {}", exr_filename.display()))?;
    Ok(())
}

pub fn output_film(render_settings: &RenderSettings, film: &Film) -> anyhow::Result<()> {
    let filename_str = render_settings
        .filename
        .clone()
        .unwrap_or_else(|| String::from("beauty"));
    let directory = Path::new(&render_settings.output_directory);
    fs::create_dir_all(directory)
        .with_context(|| format!("failed to create {}", directory.display()))?;

    let (tonemapper, converter) =
        parse_tonemapper(render_settings.tonemap_settings, render_settings.gamma);
    info!("tonemapping with {}", tonemapper.get_name());
    let framebuffer = film_to_framebuffer(film, tonemapper.as_ref(), converter);

    let png_filename = directory.join(format!("{}.png", filename_str));
    write_png(&framebuffer, &png_filename)?;
    info!("saved {}", png_filename.display());

    if render_settings.write_exr {
        let exr_filename = directory.join(format!("{}.exr", filename_str));
        write_exr(film, &exr_filename)?;
        info!("saved {}", exr_filename.display());
    }
    Ok(())
}

pub trait Renderer {
    fn render_film(&self, scene: &Scene, camera: &Camera, settings: &RenderSettings) -> Film;

    /// Renders and writes every entry in `config.render_settings`.
    fn render(&self, scene: &Scene, cameras: &[Camera], config: &Config) -> anyhow::Result<()> {
        for settings in &config.render_settings {
            let camera = cameras
                .get(settings.camera_id)
                .ok_or_else(|| anyhow!("no camera with id {}", settings.camera_id))?;
            let film = self.render_film(scene, camera, settings);
            output_film(settings, &film)?;
        }
        Ok(())
    }
}
