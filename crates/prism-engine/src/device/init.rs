/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO is supported everywhere.
    pub present_mode: wgpu::PresentMode,

    /// Required wgpu features. Empty keeps the demos portable.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface (hint).
    pub desired_maximum_frame_latency: u32,

    /// Allocates a depth attachment matching the surface size when set.
    ///
    /// 2D demos leave this `None`; anything drawing overlapping 3D geometry
    /// needs it.
    pub depth_format: Option<wgpu::TextureFormat>,
}

impl GpuInit {
    /// Defaults plus a `Depth32Float` attachment.
    pub fn with_depth() -> Self {
        Self {
            depth_format: Some(wgpu::TextureFormat::Depth32Float),
            ..Self::default()
        }
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            depth_format: None,
        }
    }
}
