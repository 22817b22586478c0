use wgpu::util::DeviceExt;

use super::vertex::Vertex;

/// Vertex data uploaded once, with an optional `u16` index buffer.
pub struct Mesh {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    index_buffer: Option<(wgpu::Buffer, u32)>,
}

impl Mesh {
    pub fn new<V: Vertex>(device: &wgpu::Device, label: &str, vertices: &[V]) -> Self {
        Self {
            vertex_buffer: vertex_buffer(device, label, vertices),
            vertex_count: vertices.len() as u32,
            index_buffer: None,
        }
    }

    pub fn indexed<V: Vertex>(
        device: &wgpu::Device,
        label: &str,
        vertices: &[V],
        indices: &[u16],
    ) -> Self {
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < vertices.len()),
            "index out of range in mesh `{label}`"
        );

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} ibo")),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer: vertex_buffer(device, label, vertices),
            vertex_count: vertices.len() as u32,
            index_buffer: Some((index_buffer, indices.len() as u32)),
        }
    }

    /// Binds the buffers to slot 0 and issues one draw.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        self.draw_instanced(pass, 0..1);
    }

    pub fn draw_instanced(&self, pass: &mut wgpu::RenderPass<'_>, instances: std::ops::Range<u32>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index_buffer {
            Some((ibo, count)) => {
                pass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..*count, 0, instances);
            }
            None => pass.draw(0..self.vertex_count, instances),
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

fn vertex_buffer<V: Vertex>(device: &wgpu::Device, label: &str, vertices: &[V]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{label} vbo")),
        contents: bytemuck::cast_slice(vertices),
        usage: wgpu::BufferUsages::VERTEX,
    })
}
