#[macro_use]
extern crate tracing;

pub mod camera;
pub mod geometry;
pub mod hittable;
pub mod integrator;
pub mod materials;
pub mod math;
pub mod parsing;
pub mod prelude;
pub mod renderer;
pub mod scene;
pub mod tonemap;
