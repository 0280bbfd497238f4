//! Face geometry and colors.

use arcclock_engine::coords::{Vec2, Viewport};
use arcclock_engine::paint::Color;

/// Opaque sRGB color as authored, before an alpha is chosen per stroke.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Premultiplied color at the given straight alpha.
    pub fn with_alpha(self, alpha: f32) -> Color {
        Color::from_rgb_u8_alpha(self.r, self.g, self.b, alpha)
    }
}

/// One hand's ring.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandStyle {
    pub radius: f32,
    pub color: Rgb,
    pub line_width: f32,
}

impl HandStyle {
    pub const HOURS: HandStyle = HandStyle { radius: 200.0, color: Rgb::new(255, 204, 0), line_width: 10.0 };
    pub const MINUTES: HandStyle = HandStyle { radius: 175.0, color: Rgb::new(0, 173, 181), line_width: 7.5 };
    pub const SECONDS: HandStyle = HandStyle { radius: 150.0, color: Rgb::new(255, 46, 99), line_width: 5.0 };
}

/// Everything about the face that is fixed across frames.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceLayout {
    /// Drawing surface in logical pixels.
    pub surface: Viewport,
    pub center: Vec2,

    /// Faint full circle behind each hand.
    pub track_color: Color,
    pub track_width: f32,

    /// Angular length of the fixed 12 o'clock marker, in radians.
    pub tick_sweep: f32,

    pub hours: HandStyle,
    pub minutes: HandStyle,
    pub seconds: HandStyle,
}

impl Default for FaceLayout {
    fn default() -> Self {
        let surface = Viewport::square(800.0);
        Self {
            surface,
            center: surface.center(),
            track_color: Color::from_rgb_u8_alpha(255, 255, 255, 0.15),
            track_width: 2.0,
            tick_sweep: 0.025,
            hours: HandStyle::HOURS,
            minutes: HandStyle::MINUTES,
            seconds: HandStyle::SECONDS,
        }
    }
}

impl FaceLayout {
    /// Hands in draw order, outermost first.
    pub fn hands(&self) -> [HandStyle; 3] {
        [self.hours, self.minutes, self.seconds]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_face_is_centered_on_800_square() {
        let layout = FaceLayout::default();
        assert_eq!(layout.surface, Viewport::new(800.0, 800.0));
        assert_eq!(layout.center, Vec2::new(400.0, 400.0));
    }

    #[test]
    fn hands_run_outer_to_inner() {
        let radii = FaceLayout::default().hands().map(|h| h.radius);
        assert_eq!(radii, [200.0, 175.0, 150.0]);
    }

    #[test]
    fn opaque_rgb_keeps_channels() {
        let c = Rgb::new(255, 204, 0).with_alpha(1.0);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 0.8).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }
}
