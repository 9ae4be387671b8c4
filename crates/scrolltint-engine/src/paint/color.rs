/// Linear premultiplied RGBA color.
///
/// Invariant: `r`, `g` and `b` are already multiplied by `a`. Surfaces are
/// configured with sRGB formats, so the GPU encodes these linear values on
/// write; colors authored as 8-bit sRGB must go through [`Color::from_srgb8`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Creates a premultiplied linear color from straight-alpha sRGB bytes.
    pub fn from_srgb8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let a = f32::from(a) / 255.0;
        Self {
            r: srgb_to_linear(r) * a,
            g: srgb_to_linear(g) * a,
            b: srgb_to_linear(b) * a,
            a,
        }
    }

    #[inline]
    pub fn opaque_srgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_srgb8(r, g, b, 255)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub(crate) fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: f64::from(self.r),
            g: f64::from(self.g),
            b: f64::from(self.b),
            a: f64::from(self.a),
        }
    }
}

/// sRGB electro-optical transfer function for one 8-bit channel.
fn srgb_to_linear(c: u8) -> f32 {
    let c = f32::from(c) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn endpoints_are_exact() {
        let black = Color::opaque_srgb8(0, 0, 0);
        let white = Color::opaque_srgb8(255, 255, 255);
        assert_eq!(black.to_array(), [0.0, 0.0, 0.0, 1.0]);
        assert!(close(white.r, 1.0) && close(white.a, 1.0));
    }

    #[test]
    fn mid_gray_is_darker_in_linear_space() {
        // sRGB 128 ~= 0.2158 linear
        assert!(close(Color::opaque_srgb8(128, 128, 128).g, 0.2158));
    }

    #[test]
    fn alpha_is_premultiplied() {
        let c = Color::from_srgb8(255, 255, 255, 51);
        assert!(close(c.a, 0.2));
        assert!(close(c.r, 0.2));
    }
}
