//! Phong-lit cubes, one per material preset, around an orbiting lamp.
//!
//! Same controls as `camera_cubes`; P pauses the lamp.

use anyhow::Result;
use glam::{Mat4, Vec3};

use prism_engine::camera::{Camera, CameraUniform, FlyControls, Projection};
use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::device::GpuInit;
use prism_engine::input::Key;
use prism_engine::lighting::{Light, LightUniform, Material, MaterialUniform};
use prism_engine::logging::{LoggingConfig, init_logging};
use prism_engine::paint::Color;
use prism_engine::render::{
    InstanceBuffer, Mesh, ModelInstance, NormalVertex, PipelineDesc, PositionVertex, RenderCtx,
    UniformBuffer, Vertex, primitives, shader,
};
use prism_engine::window::{Runtime, RuntimeConfig};
use prism_demos::{drive_fly_camera, pose_title};

const PHONG_WGSL: &str = include_str!("../../shaders/phong.wgsl");
const LAMP_WGSL: &str = include_str!("../../shaders/lamp.wgsl");

/// Size of the material array in `phong.wgsl`.
const MATERIAL_SLOTS: usize = 8;

const MATERIAL_NAMES: [&str; MATERIAL_SLOTS] = [
    "emerald",
    "jade",
    "ruby",
    "gold",
    "silver",
    "copper",
    "cyan plastic",
    "red rubber",
];

const RING_RADIUS: f32 = 3.0;
const LAMP_RADIUS: f32 = 1.6;
const LAMP_HEIGHT: f32 = 0.6;
const LAMP_SPEED: f32 = 0.8; // rad/s
const TITLE_EVERY: u64 = 30;

fn material_table() -> [MaterialUniform; MATERIAL_SLOTS] {
    MATERIAL_NAMES.map(|name| {
        let material = Material::preset(name).unwrap_or_else(|| {
            log::warn!("unknown material `{name}`, using default");
            Material::default()
        });
        MaterialUniform::from(&material)
    })
}

/// Cubes evenly spaced on a ring, each turned to face the center.
fn ring_models() -> Vec<ModelInstance> {
    (0..MATERIAL_SLOTS)
        .map(|i| {
            let angle = i as f32 / MATERIAL_SLOTS as f32 * std::f32::consts::TAU;
            let position = Light::orbit(Vec3::ZERO, RING_RADIUS, 0.0, angle);
            Mat4::from_translation(position) * Mat4::from_rotation_y(-angle)
        })
        .map(ModelInstance::from)
        .collect()
}

struct Scene {
    phong: wgpu::RenderPipeline,
    lamp: wgpu::RenderPipeline,

    camera: UniformBuffer<CameraUniform>,
    light: UniformBuffer<LightUniform>,
    materials: UniformBuffer<[MaterialUniform; MATERIAL_SLOTS]>,

    cube: Mesh,
    lamp_cube: Mesh,
    ring: InstanceBuffer<ModelInstance>,
    lamp_instance: InstanceBuffer<ModelInstance>,
}

struct LitCube {
    camera: Camera,
    controls: FlyControls,
    projection: Projection,
    light: Light,
    lamp_angle: f32,
    lamp_paused: bool,
    scene: Option<Scene>,
}

impl LitCube {
    fn new() -> Self {
        let lamp_angle = 0.0;
        Self {
            camera: Camera::new(Vec3::new(0.0, 1.5, 7.0)).with_orientation(-90.0, -10.0),
            controls: FlyControls::new(),
            projection: Projection::new(800, 600),
            light: Light::new(Light::orbit(Vec3::ZERO, LAMP_RADIUS, LAMP_HEIGHT, lamp_angle)),
            lamp_angle,
            lamp_paused: false,
            scene: None,
        }
    }

    fn advance_lamp(&mut self, dt: f32) {
        if !self.lamp_paused {
            self.lamp_angle = (self.lamp_angle + LAMP_SPEED * dt) % std::f32::consts::TAU;
        }
        self.light.position = Light::orbit(Vec3::ZERO, LAMP_RADIUS, LAMP_HEIGHT, self.lamp_angle);
    }
}

impl App for LitCube {
    fn on_start(&mut self, ctx: &RenderCtx<'_>) {
        self.projection.resize(ctx.size.width, ctx.size.height);

        let stages = wgpu::ShaderStages::VERTEX_FRAGMENT;
        let camera = UniformBuffer::new(
            ctx.device,
            "camera",
            stages,
            &CameraUniform::new(&self.camera, &self.projection),
        );
        let light = UniformBuffer::new(ctx.device, "light", stages, &LightUniform::from(&self.light));
        let materials = UniformBuffer::new(
            ctx.device,
            "materials",
            wgpu::ShaderStages::FRAGMENT,
            &material_table(),
        );

        let phong_module = shader::load_wgsl(ctx.device, "phong", PHONG_WGSL);
        let phong = PipelineDesc::new("phong", &phong_module)
            .vertex_layouts(&[NormalVertex::layout(), ModelInstance::layout()])
            .bind_group_layouts(&[camera.layout(), light.layout(), materials.layout()])
            .build(ctx);

        let lamp_module = shader::load_wgsl(ctx.device, "lamp", LAMP_WGSL);
        let lamp = PipelineDesc::new("lamp", &lamp_module)
            .vertex_layouts(&[PositionVertex::layout(), ModelInstance::layout()])
            .bind_group_layouts(&[camera.layout(), light.layout()])
            .build(ctx);

        let mut ring = InstanceBuffer::new("material ring");
        ring.write(ctx, &ring_models());

        self.scene = Some(Scene {
            phong,
            lamp,
            camera,
            light,
            materials,
            cube: Mesh::new(ctx.device, "lit cube", &primitives::cube_with_normals()),
            lamp_cube: Mesh::new(ctx.device, "lamp cube", &primitives::cube()),
            ring,
            lamp_instance: InstanceBuffer::new("lamp"),
        });
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        drive_fly_camera(ctx, &mut self.controls, &mut self.camera);

        if ctx.input_frame.key_pressed(Key::P) {
            self.lamp_paused = !self.lamp_paused;
            log::info!("lamp {}", if self.lamp_paused { "paused" } else { "orbiting" });
        }
        self.advance_lamp(ctx.time.dt);

        let size = ctx.gpu.size();
        self.projection.resize(size.width, size.height);

        if ctx.time.frame_index % TITLE_EVERY == 0 {
            ctx.runtime.set_title(pose_title("lit cube", &self.camera));
        }

        let Some(scene) = &mut self.scene else {
            return AppControl::Continue;
        };

        let queue = ctx.gpu.queue();
        scene
            .camera
            .write(queue, &CameraUniform::new(&self.camera, &self.projection));
        scene.light.write(queue, &LightUniform::from(&self.light));

        let lamp_model = Mat4::from_translation(self.light.position) * Mat4::from_scale(Vec3::splat(0.2));
        scene
            .lamp_instance
            .write(&ctx.render_ctx(), &[ModelInstance::from(lamp_model)]);

        let scene = &*scene;
        ctx.render(Color::from_srgb(0.1, 0.1, 0.1), |_, target| {
            let mut pass = target.begin_pass("lit cube");

            pass.set_pipeline(&scene.phong);
            pass.set_bind_group(0, scene.camera.bind_group(), &[]);
            pass.set_bind_group(1, scene.light.bind_group(), &[]);
            pass.set_bind_group(2, scene.materials.bind_group(), &[]);
            if scene.ring.bind(&mut pass, 1) {
                scene.cube.draw_instanced(&mut pass, scene.ring.range());
            }

            pass.set_pipeline(&scene.lamp);
            if scene.lamp_instance.bind(&mut pass, 1) {
                scene.lamp_cube.draw_instanced(&mut pass, scene.lamp_instance.range());
            }
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    Runtime::run(
        RuntimeConfig::new("lit cube").with_cursor_grab(true),
        GpuInit::with_depth(),
        LitCube::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_material_name_resolves() {
        for name in MATERIAL_NAMES {
            assert!(Material::preset(name).is_some(), "missing preset `{name}`");
        }
    }

    #[test]
    fn material_table_matches_presets() {
        let table = material_table();
        assert_eq!(table[0], MaterialUniform::from(&Material::EMERALD));
        assert_eq!(table[7], MaterialUniform::from(&Material::RED_RUBBER));
        assert_eq!(std::mem::size_of_val(&table), 48 * MATERIAL_SLOTS);
    }

    #[test]
    fn ring_cubes_sit_on_the_ring() {
        for model in ring_models() {
            let p = Mat4::from_cols_array_2d(&model.model).w_axis.truncate();
            assert!((p.length() - RING_RADIUS).abs() < 1e-5);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn paused_lamp_stays_put() {
        let mut app = LitCube::new();
        app.lamp_paused = true;
        let before = app.light.position;
        app.advance_lamp(1.0);
        assert_eq!(app.light.position, before);

        app.lamp_paused = false;
        app.advance_lamp(1.0);
        assert!((app.lamp_angle - LAMP_SPEED).abs() < 1e-6);
        assert!((app.light.position.y - LAMP_HEIGHT).abs() < 1e-6);
    }
}
