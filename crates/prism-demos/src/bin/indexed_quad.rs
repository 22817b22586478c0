//! A rectangle drawn from four vertices and six indices.

use anyhow::Result;

use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::GpuInit;
use prism_engine::logging::{LoggingConfig, init_logging};
use prism_engine::paint::Color;
use prism_engine::render::{
    Mesh, PipelineDesc, PositionVertex, RenderCtx, UniformBuffer, Vertex, primitives, shader,
};
use prism_engine::window::{Runtime, RuntimeConfig};

const FLAT_WGSL: &str = include_str!("../../shaders/flat.wgsl");

struct Scene {
    pipeline: wgpu::RenderPipeline,
    tint: UniformBuffer<[f32; 4]>,
    quad: Mesh,
}

#[derive(Default)]
struct IndexedQuad {
    scene: Option<Scene>,
}

impl App for IndexedQuad {
    fn on_start(&mut self, ctx: &RenderCtx<'_>) {
        let module = shader::load_wgsl(ctx.device, "flat", FLAT_WGSL);
        let tint = UniformBuffer::new(
            ctx.device,
            "quad tint",
            wgpu::ShaderStages::FRAGMENT,
            &Color::from_srgb(1.0, 0.5, 0.2).for_surface(ctx.surface_format).to_array(),
        );
        let pipeline = PipelineDesc::new("quad", &module)
            .vertex_layouts(&[PositionVertex::layout()])
            .bind_group_layouts(&[tint.layout()])
            .build(ctx);
        let quad = Mesh::indexed(ctx.device, "quad", &primitives::QUAD_VERTICES, &primitives::QUAD_INDICES);

        self.scene = Some(Scene { pipeline, tint, quad });
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(scene) = &self.scene else {
            return AppControl::Continue;
        };

        ctx.render(Color::from_srgb(0.2, 0.3, 0.3), |_, target| {
            let mut pass = target.begin_pass("indexed quad");
            pass.set_pipeline(&scene.pipeline);
            pass.set_bind_group(0, scene.tint.bind_group(), &[]);
            scene.quad.draw(&mut pass);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    Runtime::run(
        RuntimeConfig::new("indexed quad"),
        GpuInit::default(),
        IndexedQuad::default(),
    )
}
