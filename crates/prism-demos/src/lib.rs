//! Helpers shared by the demo binaries.

use prism_engine::camera::{Camera, FlyControls};
use prism_engine::core::FrameCtx;
use prism_engine::input::{Key, MouseButton};

/// Applies one frame of fly-camera input.
///
/// Tab toggles the cursor grab. Mouse-look is active while the cursor is
/// grabbed, or while the left button is held when it is not.
pub fn drive_fly_camera(ctx: &mut FrameCtx<'_, '_>, controls: &mut FlyControls, camera: &mut Camera) {
    if ctx.input_frame.key_pressed(Key::Tab) {
        let grab = !ctx.runtime.cursor_grabbed();
        ctx.runtime.set_cursor_grab(grab);
    }

    let look = ctx.runtime.cursor_grabbed() || ctx.input.button_down(MouseButton::Left);
    controls.set_mouse_look(look);
    controls.update(camera, ctx.input, ctx.input_frame, ctx.time.dt);
}

/// Window title with the camera pose, e.g. `lit cube | (0.0, 1.5, 7.0) yaw -90 pitch -10 fov 45`.
pub fn pose_title(name: &str, camera: &Camera) -> String {
    let p = camera.position();
    format!(
        "{name} | ({:.1}, {:.1}, {:.1}) yaw {:.0} pitch {:.0} fov {:.0}",
        p.x,
        p.y,
        p.z,
        camera.yaw(),
        camera.pitch(),
        camera.zoom()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn title_shows_pose() {
        let camera = Camera::new(Vec3::new(0.0, 1.5, 7.0)).with_orientation(-90.0, -10.0);
        assert_eq!(
            pose_title("lit cube", &camera),
            "lit cube | (0.0, 1.5, 7.0) yaw -90 pitch -10 fov 45"
        );
    }
}
