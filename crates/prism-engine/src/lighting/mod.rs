//! Phong lighting inputs: per-object materials and a point light.

mod light;
mod material;
mod uniform;

pub use light::Light;
pub use material::Material;
pub use uniform::{LightUniform, MaterialUniform};
