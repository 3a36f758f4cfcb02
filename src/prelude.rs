pub use crate::camera::Camera;
pub use crate::geometry::{solve_quadratic, QuadraticSolution, Ray, Sphere};
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::integrator::{
    IntegratorSettings, LightAccumulation, SamplerIntegrator, WhittedIntegrator,
};
pub use crate::materials::{Light, Material};
pub use crate::math::*;
pub use crate::renderer::{Film, Framebuffer, NaiveRenderer, Renderer, Vec2D};
pub use crate::scene::{default_scene, Scene};
pub use crate::tonemap::{Converter, Tonemapper};
