use bytemuck::{Pod, Zeroable};

use super::{Camera, Projection};

/// Camera data as seen by WGSL (`struct Camera { view_proj: mat4x4<f32>, position: vec3<f32> }`).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad: f32,
}

impl CameraUniform {
    pub fn new(camera: &Camera, projection: &Projection) -> Self {
        let view_proj = projection.matrix(camera.zoom()) * camera.view_matrix();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            position: camera.position().to_array(),
            _pad: 0.0,
        }
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }
}
