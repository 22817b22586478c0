use glam::Vec3;

/// Phong reflectance of a surface.
///
/// `shininess` is the specular exponent (not the 0..1 fraction found in the
/// classic OpenGL tables; presets are already scaled by 128).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

const fn m(ambient: [f32; 3], diffuse: [f32; 3], specular: [f32; 3], shininess_fraction: f32) -> Material {
    Material {
        ambient: Vec3::from_array(ambient),
        diffuse: Vec3::from_array(diffuse),
        specular: Vec3::from_array(specular),
        shininess: shininess_fraction * 128.0,
    }
}

impl Material {
    pub const EMERALD: Self = m([0.0215, 0.1745, 0.0215], [0.07568, 0.61424, 0.07568], [0.633, 0.727811, 0.633], 0.6);
    pub const JADE: Self = m([0.135, 0.2225, 0.1575], [0.54, 0.89, 0.63], [0.316228, 0.316228, 0.316228], 0.1);
    pub const OBSIDIAN: Self = m([0.05375, 0.05, 0.06625], [0.18275, 0.17, 0.22525], [0.332741, 0.328634, 0.346435], 0.3);
    pub const PEARL: Self = m([0.25, 0.20725, 0.20725], [1.0, 0.829, 0.829], [0.296648, 0.296648, 0.296648], 0.088);
    pub const RUBY: Self = m([0.1745, 0.01175, 0.01175], [0.61424, 0.04136, 0.04136], [0.727811, 0.626959, 0.626959], 0.6);
    pub const TURQUOISE: Self = m([0.1, 0.18725, 0.1745], [0.396, 0.74151, 0.69102], [0.297254, 0.30829, 0.306678], 0.1);
    pub const BRASS: Self = m([0.329412, 0.223529, 0.027451], [0.780392, 0.568627, 0.113725], [0.992157, 0.941176, 0.807843], 0.21794872);
    pub const BRONZE: Self = m([0.2125, 0.1275, 0.054], [0.714, 0.4284, 0.18144], [0.393548, 0.271906, 0.166721], 0.2);
    pub const CHROME: Self = m([0.25, 0.25, 0.25], [0.4, 0.4, 0.4], [0.774597, 0.774597, 0.774597], 0.6);
    pub const COPPER: Self = m([0.19125, 0.0735, 0.0225], [0.7038, 0.27048, 0.0828], [0.256777, 0.137622, 0.086014], 0.1);
    pub const GOLD: Self = m([0.24725, 0.1995, 0.0745], [0.75164, 0.60648, 0.22648], [0.628281, 0.555802, 0.366065], 0.4);
    pub const SILVER: Self = m([0.19225, 0.19225, 0.19225], [0.50754, 0.50754, 0.50754], [0.508273, 0.508273, 0.508273], 0.4);
    pub const BLACK_PLASTIC: Self = m([0.0, 0.0, 0.0], [0.01, 0.01, 0.01], [0.5, 0.5, 0.5], 0.25);
    pub const CYAN_PLASTIC: Self = m([0.0, 0.1, 0.06], [0.0, 0.50980392, 0.50980392], [0.50196078, 0.50196078, 0.50196078], 0.25);
    pub const GREEN_PLASTIC: Self = m([0.0, 0.0, 0.0], [0.1, 0.35, 0.1], [0.45, 0.55, 0.45], 0.25);
    pub const RED_PLASTIC: Self = m([0.0, 0.0, 0.0], [0.5, 0.0, 0.0], [0.7, 0.6, 0.6], 0.25);
    pub const WHITE_PLASTIC: Self = m([0.0, 0.0, 0.0], [0.55, 0.55, 0.55], [0.7, 0.7, 0.7], 0.25);
    pub const YELLOW_PLASTIC: Self = m([0.0, 0.0, 0.0], [0.5, 0.5, 0.0], [0.6, 0.6, 0.5], 0.25);
    pub const BLACK_RUBBER: Self = m([0.02, 0.02, 0.02], [0.01, 0.01, 0.01], [0.4, 0.4, 0.4], 0.078125);
    pub const CYAN_RUBBER: Self = m([0.0, 0.05, 0.05], [0.4, 0.5, 0.5], [0.04, 0.7, 0.7], 0.078125);
    pub const GREEN_RUBBER: Self = m([0.0, 0.05, 0.0], [0.4, 0.5, 0.4], [0.04, 0.7, 0.04], 0.078125);
    pub const RED_RUBBER: Self = m([0.05, 0.0, 0.0], [0.5, 0.4, 0.4], [0.7, 0.04, 0.04], 0.078125);
    pub const WHITE_RUBBER: Self = m([0.05, 0.05, 0.05], [0.5, 0.5, 0.5], [0.7, 0.7, 0.7], 0.078125);
    pub const YELLOW_RUBBER: Self = m([0.05, 0.05, 0.0], [0.5, 0.5, 0.4], [0.7, 0.7, 0.04], 0.078125);

    /// Named presets, in table order.
    pub const PRESETS: &'static [(&'static str, Material)] = &[
        ("emerald", Self::EMERALD),
        ("jade", Self::JADE),
        ("obsidian", Self::OBSIDIAN),
        ("pearl", Self::PEARL),
        ("ruby", Self::RUBY),
        ("turquoise", Self::TURQUOISE),
        ("brass", Self::BRASS),
        ("bronze", Self::BRONZE),
        ("chrome", Self::CHROME),
        ("copper", Self::COPPER),
        ("gold", Self::GOLD),
        ("silver", Self::SILVER),
        ("black_plastic", Self::BLACK_PLASTIC),
        ("cyan_plastic", Self::CYAN_PLASTIC),
        ("green_plastic", Self::GREEN_PLASTIC),
        ("red_plastic", Self::RED_PLASTIC),
        ("white_plastic", Self::WHITE_PLASTIC),
        ("yellow_plastic", Self::YELLOW_PLASTIC),
        ("black_rubber", Self::BLACK_RUBBER),
        ("cyan_rubber", Self::CYAN_RUBBER),
        ("green_rubber", Self::GREEN_RUBBER),
        ("red_rubber", Self::RED_RUBBER),
        ("white_rubber", Self::WHITE_RUBBER),
        ("yellow_rubber", Self::YELLOW_RUBBER),
    ];

    /// Looks up a preset by name. Case-insensitive; spaces and dashes are
    /// accepted in place of underscores (`"Black Rubber"`, `"black-rubber"`).
    pub fn preset(name: &str) -> Option<Material> {
        let wanted: String = name
            .trim()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c.to_ascii_lowercase() })
            .collect();

        Self::PRESETS
            .iter()
            .find(|(preset, _)| *preset == wanted)
            .map(|(_, material)| *material)
    }

    /// A flat material whose ambient/diffuse share one color.
    pub fn solid(color: Vec3, specular: f32, shininess: f32) -> Self {
        Self {
            ambient: color,
            diffuse: color,
            specular: Vec3::splat(specular),
            shininess,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::solid(Vec3::new(1.0, 0.5, 0.31), 0.5, 32.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_lookup_normalizes_names() {
        assert_eq!(Material::preset("gold"), Some(Material::GOLD));
        assert_eq!(Material::preset("  Black Rubber "), Some(Material::BLACK_RUBBER));
        assert_eq!(Material::preset("cyan-plastic"), Some(Material::CYAN_PLASTIC));
        assert_eq!(Material::preset("unobtainium"), None);
    }

    #[test]
    fn preset_names_are_unique() {
        for (i, (a, _)) in Material::PRESETS.iter().enumerate() {
            for (b, _) in &Material::PRESETS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn shininess_is_scaled_to_an_exponent() {
        assert_eq!(Material::EMERALD.shininess, 0.6 * 128.0);
        assert_eq!(Material::BLACK_RUBBER.shininess, 10.0);
        assert!(Material::PRESETS.iter().all(|(_, m)| m.shininess >= 1.0));
    }

    #[test]
    fn reflectance_stays_in_unit_range() {
        for (name, mat) in Material::PRESETS {
            for v in [mat.ambient, mat.diffuse, mat.specular] {
                assert!(v.min_element() >= 0.0 && v.max_element() <= 1.0, "{name}");
            }
        }
    }
}
