use glam::{Mat4, Vec3};

/// Maximum absolute pitch in degrees.
///
/// Looking straight up or down makes `front` parallel to `world_up`, which
/// collapses the `right` vector. Pitch is kept strictly inside the poles.
pub const PITCH_LIMIT: f32 = 89.0;

/// Field-of-view bounds (degrees) for [`Camera::process_mouse_scroll`].
pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 45.0;

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Discrete movement directions accepted by [`Camera::process_keyboard`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    /// Along `world_up`.
    Up,
    /// Against `world_up`.
    Down,
}

/// Free-fly camera driven by yaw/pitch Euler angles.
///
/// Invariant: `front`, `right` and `up` are unit length, mutually orthogonal
/// and consistent with the current `yaw`/`pitch`. Every mutation of the
/// angles goes through [`Camera::update_vectors`].
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,

    yaw: f32,
    pitch: f32,

    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
}

impl Camera {
    /// Creates a camera at `position` looking down `-Z` with `+Y` as world up.
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_vectors();
        camera
    }

    /// Sets the initial orientation. `pitch` is clamped to `±PITCH_LIMIT`.
    pub fn with_orientation(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
        self
    }

    /// Replaces the reference vertical used to rebuild the basis.
    ///
    /// A zero vector is ignored.
    pub fn with_world_up(mut self, world_up: Vec3) -> Self {
        if let Some(up) = world_up.try_normalize() {
            self.world_up = up;
            self.update_vectors();
        }
        self
    }

    pub fn with_speed(mut self, movement_speed: f32) -> Self {
        self.movement_speed = movement_speed;
        self
    }

    pub fn with_sensitivity(mut self, mouse_sensitivity: f32) -> Self {
        self.mouse_sensitivity = mouse_sensitivity;
        self
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    #[inline]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    #[inline]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    #[inline]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Look-at transform from world space into camera space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Moves the camera by `movement_speed * delta_time` along `direction`.
    ///
    /// `delta_time` is the frame time in seconds and must be non-negative.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        debug_assert!(delta_time >= 0.0, "negative frame time: {delta_time}");

        let velocity = self.movement_speed * delta_time;
        let step = match direction {
            CameraMovement::Forward => self.front,
            CameraMovement::Backward => -self.front,
            CameraMovement::Left => -self.right,
            CameraMovement::Right => self.right,
            CameraMovement::Up => self.world_up,
            CameraMovement::Down => -self.world_up,
        };

        self.position += step * velocity;
    }

    /// Rotates the camera by a cursor delta in pixels.
    ///
    /// `y_offset` is expected to grow upward (callers invert screen Y).
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch = (self.pitch + y_offset * self.mouse_sensitivity)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);

        self.update_vectors();
    }

    /// Narrows (positive) or widens (negative) the field of view.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    // front -> right -> up: each vector is rebuilt from the previous two, so
    // drift never accumulates across frames.
    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(self.world_up).normalize_or(self.right);
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(c: &Camera) {
        for v in [c.front(), c.right(), c.up()] {
            assert!((v.length() - 1.0).abs() < EPS, "not unit: {v:?} ({c:?})");
        }
        assert!(c.front().dot(c.right()).abs() < EPS, "front·right ({c:?})");
        assert!(c.front().dot(c.up()).abs() < EPS, "front·up ({c:?})");
        assert!(c.right().dot(c.up()).abs() < EPS, "right·up ({c:?})");
    }

    // ── basis ─────────────────────────────────────────────────────────────

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let c = Camera::default();
        assert!(c.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(c.right().abs_diff_eq(Vec3::X, EPS));
        assert!(c.up().abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn basis_is_orthonormal_for_all_yaws() {
        let mut yaw = -720.0;
        while yaw <= 720.0 {
            for pitch in [-89.0, -45.0, -10.0, 0.0, 10.0, 45.0, 89.0] {
                let c = Camera::default().with_orientation(yaw, pitch);
                assert_orthonormal(&c);
            }
            yaw += 7.5;
        }
    }

    #[test]
    fn basis_stays_orthonormal_after_many_small_moves() {
        let mut c = Camera::default();
        for i in 0..10_000 {
            let dx = ((i * 37) % 23) as f32 - 11.0;
            let dy = ((i * 53) % 19) as f32 - 9.0;
            c.process_mouse_movement(dx, dy);
        }
        assert_orthonormal(&c);
    }

    #[test]
    fn custom_world_up_is_normalized() {
        let c = Camera::default().with_world_up(Vec3::new(0.0, 0.0, 5.0));
        assert!(c.world_up().abs_diff_eq(Vec3::Z, EPS));
        assert_orthonormal(&c);
    }

    #[test]
    fn zero_world_up_is_ignored() {
        let c = Camera::default().with_world_up(Vec3::ZERO);
        assert_eq!(c.world_up(), Vec3::Y);
    }

    // ── mouse ─────────────────────────────────────────────────────────────

    #[test]
    fn mouse_x_offset_scales_into_yaw() {
        let mut c = Camera::default();
        c.process_mouse_movement(100.0, 0.0);
        assert_eq!(c.yaw(), DEFAULT_YAW + 10.0);
        assert_eq!(c.pitch(), DEFAULT_PITCH);
    }

    #[test]
    fn pitch_clamps_at_upper_limit() {
        let mut c = Camera::default();
        for _ in 0..50 {
            c.process_mouse_movement(0.0, 1000.0);
            assert!(c.pitch() <= PITCH_LIMIT);
        }
        assert_eq!(c.pitch(), PITCH_LIMIT);
        assert_orthonormal(&c);
    }

    #[test]
    fn pitch_clamps_at_lower_limit() {
        let mut c = Camera::default();
        for _ in 0..50 {
            c.process_mouse_movement(0.0, -1000.0);
        }
        assert_eq!(c.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn pitch_never_leaves_limits_for_mixed_sequences() {
        let mut c = Camera::default();
        let offsets = [900.0, -3.0, 250.0, -2000.0, 17.5, -0.25, 1500.0, -1500.0];
        for (i, dy) in offsets.iter().cycle().take(400).enumerate() {
            c.process_mouse_movement(i as f32, *dy);
            assert!((-PITCH_LIMIT..=PITCH_LIMIT).contains(&c.pitch()));
        }
    }

    #[test]
    fn yaw_is_not_wrapped() {
        let mut c = Camera::default();
        for _ in 0..10 {
            c.process_mouse_movement(3600.0, 0.0);
        }
        assert!((c.yaw() - (DEFAULT_YAW + 3600.0)).abs() < 1e-2);
    }

    #[test]
    fn orientation_builder_clamps_pitch() {
        let c = Camera::default().with_orientation(0.0, 120.0);
        assert_eq!(c.pitch(), PITCH_LIMIT);
    }

    // ── keyboard ──────────────────────────────────────────────────────────

    #[test]
    fn forward_for_one_second_moves_by_speed() {
        let mut c = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        c.process_keyboard(CameraMovement::Forward, 1.0);
        assert!(c.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), EPS));
    }

    #[test]
    fn forward_then_backward_round_trips() {
        let start = Vec3::new(1.5, -2.0, 7.25);
        let mut c = Camera::new(start).with_orientation(33.0, -12.0);
        c.process_keyboard(CameraMovement::Forward, 0.016);
        c.process_keyboard(CameraMovement::Backward, 0.016);
        assert!(c.position().abs_diff_eq(start, EPS));
    }

    #[test]
    fn strafe_moves_along_right() {
        let mut c = Camera::new(Vec3::ZERO).with_speed(1.0);
        c.process_keyboard(CameraMovement::Right, 2.0);
        assert!(c.position().abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), EPS));
        c.process_keyboard(CameraMovement::Left, 4.0);
        assert!(c.position().abs_diff_eq(Vec3::new(-2.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn vertical_moves_follow_world_up_not_pitch() {
        let mut c = Camera::new(Vec3::ZERO).with_orientation(-90.0, 60.0);
        c.process_keyboard(CameraMovement::Up, 1.0);
        assert!(c.position().abs_diff_eq(Vec3::new(0.0, DEFAULT_SPEED, 0.0), EPS));
        c.process_keyboard(CameraMovement::Down, 1.0);
        assert!(c.position().abs_diff_eq(Vec3::ZERO, EPS));
    }

    #[test]
    fn zero_delta_time_does_not_move() {
        let mut c = Camera::default();
        c.process_keyboard(CameraMovement::Forward, 0.0);
        assert_eq!(c.position(), Vec3::new(0.0, 0.0, 3.0));
    }

    // ── zoom ──────────────────────────────────────────────────────────────

    #[test]
    fn scroll_narrows_and_clamps_zoom() {
        let mut c = Camera::default();
        c.process_mouse_scroll(5.0);
        assert_eq!(c.zoom(), DEFAULT_ZOOM - 5.0);
        c.process_mouse_scroll(1000.0);
        assert_eq!(c.zoom(), ZOOM_MIN);
        c.process_mouse_scroll(-1000.0);
        assert_eq!(c.zoom(), ZOOM_MAX);
    }

    // ── view matrix ───────────────────────────────────────────────────────

    #[test]
    fn view_matrix_is_pure() {
        let c = Camera::default().with_orientation(12.0, 34.0);
        assert_eq!(c.view_matrix(), c.view_matrix());
    }

    #[test]
    fn view_matrix_maps_eye_to_origin_and_front_to_negative_z() {
        let c = Camera::new(Vec3::new(4.0, -1.0, 2.0)).with_orientation(10.0, 20.0);
        let view = c.view_matrix();

        let eye = view.transform_point3(c.position());
        assert!(eye.abs_diff_eq(Vec3::ZERO, EPS));

        let ahead = view.transform_point3(c.position() + c.front());
        assert!(ahead.abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }
}
