use nalgebra::{Point3, Vector3};

pub type P3 = Point3<f32>;
pub type V3 = Vector3<f32>;

pub mod camera;
pub mod example_scenes;
pub mod image;
pub mod material;
pub mod object;
pub mod ray;
pub mod renderer;
pub mod rgb;
pub mod scene;
pub mod shape;
pub mod util;

pub use crate::ray::Ray;
pub use crate::rgb::RGBA;
