use glam::Mat4;

/// Perspective projection parameters.
///
/// The vertical field of view is not stored here; it comes from
/// [`Camera::zoom`](super::Camera::zoom) at the time the matrix is built.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        let mut projection = Self {
            aspect: 1.0,
            z_near: 0.1,
            z_far: 100.0,
        };
        projection.resize(width, height);
        projection
    }

    /// Recomputes the aspect ratio. Zero-sized dimensions (minimized window)
    /// keep the previous aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Right-handed perspective with wgpu's `[0, 1]` depth range.
    pub fn matrix(&self, fov_y_degrees: f32) -> Mat4 {
        Mat4::perspective_rh(fov_y_degrees.to_radians(), self.aspect, self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn aspect_follows_size() {
        let p = Projection::new(800, 600);
        assert!((p.aspect() - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn zero_size_resize_is_ignored() {
        let mut p = Projection::new(1280, 720);
        let before = p.aspect();
        p.resize(0, 720);
        p.resize(1280, 0);
        assert_eq!(p.aspect(), before);
    }

    #[test]
    fn near_and_far_planes_map_to_depth_range() {
        let p = Projection::new(800, 600);
        let m = p.matrix(45.0);

        let near = m.project_point3(Vec3::new(0.0, 0.0, -p.z_near));
        let far = m.project_point3(Vec3::new(0.0, 0.0, -p.z_far));
        assert!(near.z.abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-5);
    }
}
