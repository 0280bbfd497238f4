/// Premultiplied RGBA color in the surface's encoding.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// Components are sRGB-encoded values written straight to a non-sRGB surface,
/// so blending happens in sRGB space the way a 2D canvas blends.
///
/// Matches the premultiplied blend state used by the arc pipeline, so a
/// translucent track ring composites without dark fringes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes plus a straight alpha in `[0, 1]`.
    ///
    /// This is the shape CSS-style `rgba(255, 204, 0, 0.5)` literals take.
    #[inline]
    pub fn from_rgb_u8_alpha(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_bytes_map_to_unit_range() {
        let c = Color::from_rgb_u8_alpha(255, 0, 51, 1.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn alpha_premultiplies_rgb() {
        let c = Color::from_rgb_u8_alpha(255, 255, 255, 0.15);
        assert!((c.r - 0.15).abs() < 1e-6);
        assert!((c.a - 0.15).abs() < 1e-6);
    }

    #[test]
    fn opaque_bytes_reach_the_surface_unchanged() {
        // Non-sRGB targets store the shader output as-is: byte = round(c * 255).
        let c = Color::from_rgb_u8_alpha(0, 173, 181, 1.0);
        let bytes = c.to_array().map(|v| (v * 255.0).round() as u8);
        assert_eq!(bytes, [0, 173, 181, 255]);
    }

    #[test]
    fn straight_components_are_clamped() {
        let c = Color::from_straight(1.5, -0.5, 0.5, 2.0);
        assert_eq!(c.to_array(), [1.0, 0.0, 0.5, 1.0]);
    }
}
