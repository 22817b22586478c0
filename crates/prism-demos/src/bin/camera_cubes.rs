//! Ten rotating cubes explored with the free-fly camera.
//!
//! WASD moves, Space/Shift rise and sink, the mouse looks around and the
//! wheel zooms. Tab releases or recaptures the cursor; Escape quits.

use anyhow::Result;
use glam::{Mat4, Vec3};

use prism_engine::camera::{Camera, CameraUniform, FlyControls, Projection};
use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::GpuInit;
use prism_engine::logging::{LoggingConfig, init_logging};
use prism_engine::paint::Color;
use prism_engine::render::{
    InstanceBuffer, Mesh, ModelInstance, PipelineDesc, PositionVertex, RenderCtx, UniformBuffer,
    Vertex, primitives, shader,
};
use prism_engine::window::{Runtime, RuntimeConfig};
use prism_demos::{drive_fly_camera, pose_title};

const CUBES_WGSL: &str = include_str!("../../shaders/cubes.wgsl");

const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Title refresh interval, in frames.
const TITLE_EVERY: u64 = 30;

struct Scene {
    pipeline: wgpu::RenderPipeline,
    camera: UniformBuffer<CameraUniform>,
    cube: Mesh,
    instances: InstanceBuffer<ModelInstance>,
}

struct CameraCubes {
    camera: Camera,
    controls: FlyControls,
    projection: Projection,
    scene: Option<Scene>,
}

impl CameraCubes {
    fn new() -> Self {
        Self {
            camera: Camera::new(Vec3::new(0.0, 0.0, 3.0)),
            controls: FlyControls::new(),
            projection: Projection::new(800, 600),
            scene: None,
        }
    }
}

fn cube_models(elapsed: f32) -> Vec<ModelInstance> {
    let axis = Vec3::new(1.0, 0.3, 0.5).normalize();
    CUBE_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, &position)| {
            let angle = (20.0 * i as f32).to_radians() + elapsed * 0.5;
            Mat4::from_translation(position) * Mat4::from_axis_angle(axis, angle)
        })
        .map(ModelInstance::from)
        .collect()
}

impl App for CameraCubes {
    fn on_start(&mut self, ctx: &RenderCtx<'_>) {
        self.projection.resize(ctx.size.width, ctx.size.height);

        let module = shader::load_wgsl(ctx.device, "cubes", CUBES_WGSL);
        let camera = UniformBuffer::new(
            ctx.device,
            "camera",
            wgpu::ShaderStages::VERTEX,
            &CameraUniform::new(&self.camera, &self.projection),
        );
        let pipeline = PipelineDesc::new("cubes", &module)
            .vertex_layouts(&[PositionVertex::layout(), ModelInstance::layout()])
            .bind_group_layouts(&[camera.layout()])
            .build(ctx);
        let cube = Mesh::new(ctx.device, "cube", &primitives::cube());

        self.scene = Some(Scene {
            pipeline,
            camera,
            cube,
            instances: InstanceBuffer::new("cube instances"),
        });
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        drive_fly_camera(ctx, &mut self.controls, &mut self.camera);

        let size = ctx.gpu.size();
        self.projection.resize(size.width, size.height);

        if ctx.time.frame_index % TITLE_EVERY == 0 {
            ctx.runtime.set_title(pose_title("camera cubes", &self.camera));
        }

        let Some(scene) = &mut self.scene else {
            return AppControl::Continue;
        };

        scene
            .camera
            .write(ctx.gpu.queue(), &CameraUniform::new(&self.camera, &self.projection));
        scene
            .instances
            .write(&ctx.render_ctx(), &cube_models(ctx.time.elapsed));

        let scene = &*scene;
        ctx.render(Color::from_srgb(0.1, 0.1, 0.1), |_, target| {
            let mut pass = target.begin_pass("cubes");
            pass.set_pipeline(&scene.pipeline);
            pass.set_bind_group(0, scene.camera.bind_group(), &[]);
            if scene.instances.bind(&mut pass, 1) {
                scene.cube.draw_instanced(&mut pass, scene.instances.range());
            }
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    Runtime::run(
        RuntimeConfig::new("camera cubes").with_cursor_grab(true),
        GpuInit::with_depth(),
        CameraCubes::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_model_per_cube_at_its_position() {
        let models = cube_models(0.0);
        assert_eq!(models.len(), CUBE_POSITIONS.len());
        for (model, position) in models.iter().zip(CUBE_POSITIONS) {
            let translation = Mat4::from_cols_array_2d(&model.model).w_axis.truncate();
            assert!(translation.abs_diff_eq(position, 1e-6));
        }
    }
}
