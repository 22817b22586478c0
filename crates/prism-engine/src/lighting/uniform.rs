//! GPU layouts for lighting data.
//!
//! WGSL aligns `vec3<f32>` to 16 bytes, so every `vec3` is followed by a
//! scalar or explicit padding.

use bytemuck::{Pod, Zeroable};

use super::{Light, Material};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MaterialUniform {
    pub ambient: [f32; 3],
    pub _pad0: f32,
    pub diffuse: [f32; 3],
    pub _pad1: f32,
    pub specular: [f32; 3],
    pub shininess: f32,
}

impl From<&Material> for MaterialUniform {
    fn from(m: &Material) -> Self {
        Self {
            ambient: m.ambient.to_array(),
            _pad0: 0.0,
            diffuse: m.diffuse.to_array(),
            _pad1: 0.0,
            specular: m.specular.to_array(),
            shininess: m.shininess,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    pub _pad0: f32,
    pub ambient: [f32; 3],
    pub _pad1: f32,
    pub diffuse: [f32; 3],
    pub _pad2: f32,
    pub specular: [f32; 3],
    pub _pad3: f32,
}

impl From<&Light> for LightUniform {
    fn from(l: &Light) -> Self {
        Self {
            position: l.position.to_array(),
            _pad0: 0.0,
            ambient: l.ambient.to_array(),
            _pad1: 0.0,
            diffuse: l.diffuse.to_array(),
            _pad2: 0.0,
            specular: l.specular.to_array(),
            _pad3: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn material_matches_wgsl_layout() {
        assert_eq!(size_of::<MaterialUniform>(), 48);
        assert_eq!(offset_of!(MaterialUniform, diffuse), 16);
        assert_eq!(offset_of!(MaterialUniform, specular), 32);
        assert_eq!(offset_of!(MaterialUniform, shininess), 44);
    }

    #[test]
    fn light_matches_wgsl_layout() {
        assert_eq!(size_of::<LightUniform>(), 64);
        assert_eq!(offset_of!(LightUniform, ambient), 16);
        assert_eq!(offset_of!(LightUniform, diffuse), 32);
        assert_eq!(offset_of!(LightUniform, specular), 48);
    }

    #[test]
    fn material_fields_are_copied() {
        let u = MaterialUniform::from(&Material::RUBY);
        assert_eq!(u.diffuse, Material::RUBY.diffuse.to_array());
        assert_eq!(u.shininess, Material::RUBY.shininess);
    }
}
