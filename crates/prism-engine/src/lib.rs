//! Prism engine crate.
//!
//! A thin wgpu/winit runtime plus the free-fly [`camera::Camera`] and the
//! [`lighting::Material`] table used by the tutorial demos.

pub mod camera;
pub mod core;
pub mod device;
pub mod input;
pub mod lighting;
pub mod logging;
pub mod paint;
pub mod render;
pub mod time;
pub mod window;
