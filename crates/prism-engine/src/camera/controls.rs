use crate::input::{InputEvent, InputFrame, InputState, Key};

use super::{Camera, CameraMovement, CursorTracker};

/// WASD + mouse-look + wheel-zoom bindings for a [`Camera`].
///
/// Owns the cursor tracker, so the first cursor sample after the pointer
/// enters (or focus returns) never rotates the camera.
#[derive(Debug, Clone)]
pub struct FlyControls {
    cursor: CursorTracker,
    bindings: Vec<(Key, CameraMovement)>,
    mouse_look: bool,
}

impl FlyControls {
    pub fn new() -> Self {
        Self {
            cursor: CursorTracker::new(),
            bindings: vec![
                (Key::W, CameraMovement::Forward),
                (Key::S, CameraMovement::Backward),
                (Key::A, CameraMovement::Left),
                (Key::D, CameraMovement::Right),
                (Key::Space, CameraMovement::Up),
                (Key::Shift, CameraMovement::Down),
            ],
            mouse_look: true,
        }
    }

    /// Adds (or replaces) the movement bound to `key`.
    pub fn bind(mut self, key: Key, movement: CameraMovement) -> Self {
        self.bindings.retain(|(k, _)| *k != key);
        self.bindings.push((key, movement));
        self
    }

    /// Enables or disables rotation from pointer moves (e.g. while the
    /// cursor is released to interact with the window).
    pub fn set_mouse_look(&mut self, enabled: bool) {
        if enabled != self.mouse_look {
            self.cursor.reset();
        }
        self.mouse_look = enabled;
    }

    pub fn mouse_look(&self) -> bool {
        self.mouse_look
    }

    /// Applies one frame of input to `camera`.
    ///
    /// Held keys move the camera by `dt`; pointer events are consumed in
    /// arrival order so each move produces exactly one rotation.
    pub fn update(&mut self, camera: &mut Camera, input: &InputState, frame: &InputFrame, dt: f32) {
        for &(key, movement) in &self.bindings {
            if input.key_down(key) {
                camera.process_keyboard(movement, dt);
            }
        }

        for ev in &frame.events {
            match ev {
                InputEvent::PointerMoved(p) if self.mouse_look => {
                    if let Some((dx, dy)) = self.cursor.offset(p.x, p.y) {
                        camera.process_mouse_movement(dx, dy);
                    }
                }
                InputEvent::PointerLeft | InputEvent::Focused(false) => self.cursor.reset(),
                _ => {}
            }
        }

        if frame.wheel_lines != 0.0 {
            camera.process_mouse_scroll(frame.wheel_lines);
        }
    }
}

impl Default for FlyControls {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyState, MouseWheelDelta, PointerMoveEvent};
    use glam::Vec3;

    fn feed(state: &mut InputState, frame: &mut InputFrame, events: impl IntoIterator<Item = InputEvent>) {
        for ev in events {
            state.apply_event(frame, ev);
        }
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    #[test]
    fn first_pointer_sample_does_not_rotate() {
        let mut camera = Camera::default();
        let mut controls = FlyControls::new();
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        feed(&mut state, &mut frame, [moved(900.0, 20.0)]);
        controls.update(&mut camera, &state, &frame, 0.016);

        assert_eq!(camera, Camera::default());
    }

    #[test]
    fn subsequent_samples_rotate_with_inverted_y() {
        let mut camera = Camera::default();
        let mut controls = FlyControls::new();
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        feed(&mut state, &mut frame, [moved(100.0, 100.0), moved(200.0, 90.0)]);
        controls.update(&mut camera, &state, &frame, 0.016);

        assert_eq!(camera.yaw(), -90.0 + 10.0);
        assert!((camera.pitch() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn pointer_leave_rearms_seeding() {
        let mut camera = Camera::default();
        let mut controls = FlyControls::new();
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        feed(&mut state, &mut frame, [moved(0.0, 0.0), InputEvent::PointerLeft, moved(5000.0, 5000.0)]);
        controls.update(&mut camera, &state, &frame, 0.016);

        assert_eq!(camera.yaw(), -90.0);
        assert_eq!(camera.pitch(), 0.0);
    }

    #[test]
    fn held_keys_move_by_frame_time() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let mut controls = FlyControls::new();
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        feed(&mut state, &mut frame, [InputEvent::Key { key: Key::W, state: KeyState::Pressed, repeat: false }]);
        controls.update(&mut camera, &state, &frame, 1.0);

        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1e-5));
    }

    #[test]
    fn rebinding_replaces_existing_key() {
        let mut camera = Camera::new(Vec3::ZERO).with_speed(1.0);
        let mut controls = FlyControls::new().bind(Key::W, CameraMovement::Up);
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        feed(&mut state, &mut frame, [InputEvent::Key { key: Key::W, state: KeyState::Pressed, repeat: false }]);
        controls.update(&mut camera, &state, &frame, 1.0);

        assert!(camera.position().abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn disabled_mouse_look_ignores_pointer_and_reseeds() {
        let mut camera = Camera::default();
        let mut controls = FlyControls::new();
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        controls.set_mouse_look(false);
        feed(&mut state, &mut frame, [moved(0.0, 0.0), moved(300.0, 300.0)]);
        controls.update(&mut camera, &state, &frame, 0.016);
        assert_eq!(camera.yaw(), -90.0);

        frame.clear();
        controls.set_mouse_look(true);
        feed(&mut state, &mut frame, [moved(600.0, 600.0)]);
        controls.update(&mut camera, &state, &frame, 0.016);
        assert_eq!(camera.yaw(), -90.0);
        assert!(controls.mouse_look());
    }

    #[test]
    fn wheel_zooms() {
        let mut camera = Camera::default();
        let mut controls = FlyControls::new();
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        feed(&mut state, &mut frame, [InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 2.0 })]);
        controls.update(&mut camera, &state, &frame, 0.016);

        assert_eq!(camera.zoom(), 43.0);
    }
}
