//! GPU rendering helpers.
//!
//! Thin wrappers over wgpu that remove repetition from the demos: shader
//! loading with logged diagnostics, mesh upload, single-value uniform
//! buffers and a pipeline builder.
//!
//! Convention: right-handed world space, `+Y` up, wgpu clip space with
//! depth in `[0, 1]`.

mod ctx;
mod instance;
mod mesh;
mod pipeline;
mod uniform;
mod vertex;

pub mod primitives;
pub mod shader;

pub use ctx::{RenderCtx, RenderTarget};
pub use instance::{InstanceBuffer, ModelInstance};
pub use mesh::Mesh;
pub use pipeline::PipelineDesc;
pub use uniform::UniformBuffer;
pub use vertex::{ColorVertex, NormalVertex, PositionVertex, Vertex};
