mod vec;

pub use vec::{Vec2, Vec3};

pub type Float = f64;

pub use std::f64::INFINITY;
