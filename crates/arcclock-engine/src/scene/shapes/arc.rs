use crate::coords::{ArcDirection, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Stroked circular arc draw payload.
///
/// Folds the canvas-style sequence (set stroke color, set line width, trace arc,
/// stroke) into one value. Angles are radians in screen space: 0 is 3 o'clock and
/// positive angles run clockwise. Strokes have butt caps.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub direction: ArcDirection,
    /// Stroke width in logical pixels, centered on the radius.
    pub width: f32,
    pub color: Color,
}

impl ArcCmd {
    /// Swept angle in radians, in `[0, 2π]`.
    #[inline]
    pub fn sweep(&self) -> f32 {
        self.direction.sweep(self.start_angle, self.end_angle)
    }

    /// Start angle and sweep of the equivalent clockwise arc.
    #[inline]
    pub fn clockwise_span(&self) -> (f32, f32) {
        let sweep = self.sweep();
        match self.direction {
            ArcDirection::Clockwise => (self.start_angle, sweep),
            ArcDirection::CounterClockwise => (self.start_angle - sweep, sweep),
        }
    }

    /// Returns true when every scalar is finite and radius/width are non-negative.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius >= 0.0
            && self.width.is_finite()
            && self.width >= 0.0
            && self.start_angle.is_finite()
            && self.end_angle.is_finite()
            && self.color.is_finite()
    }
}

impl DrawList {
    /// Records a stroked arc.
    #[inline]
    pub fn push_arc(&mut self, arc: ArcCmd) {
        self.push(DrawCmd::Arc(arc));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::FULL_TURN;

    fn cmd(start: f32, end: f32, direction: ArcDirection) -> ArcCmd {
        ArcCmd {
            center: Vec2::splat(0.0),
            radius: 10.0,
            start_angle: start,
            end_angle: end,
            direction,
            width: 1.0,
            color: Color::transparent(),
        }
    }

    #[test]
    fn counter_clockwise_span_starts_at_end() {
        let (start, sweep) = cmd(1.0, 0.25, ArcDirection::CounterClockwise).clockwise_span();
        assert!((start - 0.25).abs() < 1e-6);
        assert!((sweep - 0.75).abs() < 1e-6);
    }

    #[test]
    fn full_circle_span() {
        let (_, sweep) = cmd(0.0, FULL_TURN, ArcDirection::Clockwise).clockwise_span();
        assert_eq!(sweep, FULL_TURN);
    }

    #[test]
    fn nan_angle_is_invalid() {
        assert!(!cmd(f32::NAN, 1.0, ArcDirection::Clockwise).is_valid());
        assert!(cmd(0.0, 1.0, ArcDirection::Clockwise).is_valid());
    }
}
