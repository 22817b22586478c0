/// Linear RGBA color (straight alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Color from sRGB-encoded components in `[0, 1]`, converted to linear.
    ///
    /// Use this for colors picked by eye; an sRGB surface re-encodes them on
    /// write so they show up as written.
    pub fn from_srgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgb(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
    }

    pub fn from_srgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_srgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Values to write into a surface of `format`.
    ///
    /// sRGB surfaces encode on write and take linear values as is; other
    /// formats store raw values, so the color is sRGB-encoded here.
    pub fn for_surface(self, format: wgpu::TextureFormat) -> Self {
        if format.is_srgb() {
            return self;
        }
        Self::rgba(
            linear_to_srgb(self.r),
            linear_to_srgb(self.g),
            linear_to_srgb(self.b),
            self.a,
        )
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_endpoints_are_preserved() {
        assert_eq!(Color::from_srgb_u8(0, 0, 0), Color::BLACK);
        let white = Color::from_srgb_u8(255, 255, 255);
        assert!((white.r - 1.0).abs() < 1e-6);
    }

    #[test]
    fn srgb_surface_takes_linear_values() {
        let teal = Color::from_srgb(0.2, 0.3, 0.3);
        assert_eq!(teal.for_surface(wgpu::TextureFormat::Bgra8UnormSrgb), teal);
    }

    #[test]
    fn unorm_surface_gets_the_authored_srgb_values() {
        let orange = Color::from_srgb(1.0, 0.5, 0.2).for_surface(wgpu::TextureFormat::Bgra8Unorm);
        assert!((orange.r - 1.0).abs() < 1e-5);
        assert!((orange.g - 0.5).abs() < 1e-5);
        assert!((orange.b - 0.2).abs() < 1e-5);
        assert_eq!(orange.a, 1.0);
    }

    #[test]
    fn srgb_midtone_is_darker_in_linear() {
        let c = Color::from_srgb_u8(128, 128, 128);
        assert!(c.r > 0.2 && c.r < 0.23);
    }
}
