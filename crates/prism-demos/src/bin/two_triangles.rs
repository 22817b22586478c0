//! Two triangles side by side, each drawn by its own pipeline: one orange,
//! one blue, over a teal background.

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

/// One triangle with its own pipeline and color.
struct FlatTriangle {
    pipeline: wgpu::RenderPipeline,
    tint: UniformBuffer<[f32; 4]>,
    mesh: Mesh,
}

impl FlatTriangle {
    fn new(
        ctx: &RenderCtx<'_>,
        label: &str,
        module: &wgpu::ShaderModule,
        vertices: &[PositionVertex],
        color: Color,
    ) -> Self {
        let tint = color.for_surface(ctx.surface_format).to_array();
        let tint = UniformBuffer::new(ctx.device, label, wgpu::ShaderStages::FRAGMENT, &tint);
        let pipeline = PipelineDesc::new(label, module)
            .vertex_layouts(&[PositionVertex::layout()])
            .bind_group_layouts(&[tint.layout()])
            .build(ctx);
        let mesh = Mesh::new(ctx.device, label, vertices);

        Self { pipeline, tint, mesh }
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, self.tint.bind_group(), &[]);
        self.mesh.draw(pass);
    }
}

#[derive(Default)]
struct TwoTriangles {
    triangles: Vec<FlatTriangle>,
}

impl App for TwoTriangles {
    fn on_start(&mut self, ctx: &RenderCtx<'_>) {
        let module = shader::load_wgsl(ctx.device, "flat", FLAT_WGSL);
        self.triangles = vec![
            FlatTriangle::new(
                ctx,
                "orange triangle",
                &module,
                &primitives::LEFT_TRIANGLE,
                Color::from_srgb(1.0, 0.5, 0.2),
            ),
            FlatTriangle::new(
                ctx,
                "blue triangle",
                &module,
                &primitives::RIGHT_TRIANGLE,
                Color::from_srgb(0.1, 0.2, 1.0),
            ),
        ];
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let triangles = &self.triangles;
        ctx.render(Color::from_srgb(0.2, 0.3, 0.3), |_, target| {
            let mut pass = target.begin_pass("two triangles");
            for triangle in triangles {
                triangle.draw(&mut pass);
            }
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    Runtime::run(
        RuntimeConfig::new("two triangles"),
        GpuInit::default(),
        TwoTriangles::default(),
    )
}
