/// A single acquired frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next
/// frame. Presentation happens when it is dropped after submission.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
