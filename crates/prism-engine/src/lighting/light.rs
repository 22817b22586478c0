use glam::Vec3;

/// Point light with separate Phong intensity terms.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Light {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.5),
            specular: Vec3::ONE,
        }
    }

    /// Point on a horizontal circle of `radius` around `center` at `angle`
    /// radians, raised by `height`.
    pub fn orbit(center: Vec3, radius: f32, height: f32, angle: f32) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        center + Vec3::new(cos * radius, height, sin * radius)
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::new(Vec3::new(1.2, 1.0, 2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_white_phong_terms() {
        let light = Light::new(Vec3::Y);
        assert_eq!(light.position, Vec3::Y);
        assert_eq!(light.ambient, Vec3::splat(0.2));
        assert_eq!(light.diffuse, Vec3::splat(0.5));
        assert_eq!(light.specular, Vec3::ONE);
    }

    #[test]
    fn orbit_keeps_radius_and_height() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        for i in 0..16 {
            let p = Light::orbit(center, 2.0, 0.5, i as f32 * 0.4);
            let flat = (p - center) * Vec3::new(1.0, 0.0, 1.0);
            assert!((flat.length() - 2.0).abs() < 1e-5);
            assert!((p.y - 2.5).abs() < 1e-6);
        }
    }
}
