use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::vertex::Vertex;
use super::RenderCtx;

/// Per-object model matrix, fed as a per-instance vertex attribute.
///
/// Occupies shader locations 2..=5 (one `vec4` column each), after the
/// per-vertex position and color/normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ModelInstance {
    pub model: [[f32; 4]; 4],
}

impl ModelInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4
    ];

    pub fn new(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

impl From<Mat4> for ModelInstance {
    fn from(model: Mat4) -> Self {
        Self::new(model)
    }
}

impl Vertex for ModelInstance {
    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// Growable per-instance vertex buffer, rewritten every frame.
pub struct InstanceBuffer<T: Vertex> {
    label: String,
    buffer: Option<wgpu::Buffer>,
    capacity: usize,
    len: u32,
    _marker: std::marker::PhantomData<T>,
}

impl<T: Vertex> InstanceBuffer<T> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            buffer: None,
            capacity: 0,
            len: 0,
            _marker: std::marker::PhantomData,
        }
    }

    /// Uploads `instances`, reallocating when they no longer fit.
    pub fn write(&mut self, ctx: &RenderCtx<'_>, instances: &[T]) {
        self.ensure_capacity(ctx, instances.len());
        self.len = instances.len() as u32;

        if instances.is_empty() {
            return;
        }
        if let Some(buffer) = &self.buffer {
            ctx.queue.write_buffer(buffer, 0, bytemuck::cast_slice(instances));
        }
    }

    /// Binds the uploaded instances to vertex slot `slot`.
    ///
    /// Returns `false` (and binds nothing) before the first `write`.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>, slot: u32) -> bool {
        match &self.buffer {
            Some(buffer) => {
                pass.set_vertex_buffer(slot, buffer.slice(..));
                true
            }
            None => false,
        }
    }

    /// Instance range covering everything written last.
    pub fn range(&self) -> std::ops::Range<u32> {
        0..self.len
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn ensure_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.capacity && self.buffer.is_some() {
            return;
        }

        let new_cap = grown_capacity(required);
        log::debug!("instance buffer `{}` grows to {new_cap}", self.label);

        self.buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&self.label),
            size: (new_cap * std::mem::size_of::<T>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.capacity = new_cap;
    }
}

fn grown_capacity(required: usize) -> usize {
    required.next_power_of_two().max(16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn model_instance_is_column_major() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let inst = ModelInstance::from(m);
        assert_eq!(inst.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(std::mem::size_of::<ModelInstance>(), 64);
    }

    #[test]
    fn instance_layout_starts_after_vertex_attributes() {
        let layout = ModelInstance::layout();
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
        let locations: Vec<u32> = layout.attributes.iter().map(|a| a.shader_location).collect();
        assert_eq!(locations, vec![2, 3, 4, 5]);
        assert_eq!(layout.attributes[3].offset, 48);
    }

    #[test]
    fn capacity_grows_in_powers_of_two() {
        assert_eq!(grown_capacity(0), 16);
        assert_eq!(grown_capacity(10), 16);
        assert_eq!(grown_capacity(17), 32);
        assert_eq!(grown_capacity(100), 128);
    }
}
