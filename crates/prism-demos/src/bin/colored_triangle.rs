//! One triangle with red, green and blue corners blended across the face.

use anyhow::Result;

use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::GpuInit;
use prism_engine::logging::{LoggingConfig, init_logging};
use prism_engine::paint::Color;
use prism_engine::render::{ColorVertex, Mesh, PipelineDesc, RenderCtx, Vertex, primitives, shader};
use prism_engine::window::{Runtime, RuntimeConfig};

const VERTEX_COLOR_WGSL: &str = include_str!("../../shaders/vertex_color.wgsl");

struct Scene {
    pipeline: wgpu::RenderPipeline,
    triangle: Mesh,
}

#[derive(Default)]
struct ColoredTriangle {
    scene: Option<Scene>,
}

impl App for ColoredTriangle {
    fn on_start(&mut self, ctx: &RenderCtx<'_>) {
        let module = shader::load_wgsl(ctx.device, "vertex color", VERTEX_COLOR_WGSL);
        let pipeline = PipelineDesc::new("vertex color", &module)
            .vertex_layouts(&[ColorVertex::layout()])
            .build(ctx);
        let triangle = Mesh::new(ctx.device, "colored triangle", &primitives::COLORED_TRIANGLE);

        self.scene = Some(Scene { pipeline, triangle });
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(scene) = &self.scene else {
            return AppControl::Continue;
        };

        ctx.render(Color::from_srgb(0.2, 0.3, 0.3), |_, target| {
            let mut pass = target.begin_pass("colored triangle");
            pass.set_pipeline(&scene.pipeline);
            scene.triangle.draw(&mut pass);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    Runtime::run(
        RuntimeConfig::new("colored triangle"),
        GpuInit::default(),
        ColoredTriangle::default(),
    )
}
