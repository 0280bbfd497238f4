//! One hand as a progress ring.

use std::f64::consts::{FRAC_PI_2, TAU};

use arcclock_engine::coords::{ArcDirection, Vec2};
use arcclock_engine::paint::Color;
use arcclock_engine::scene::{ArcCmd, DrawList};

use crate::easing::ease_in_out_cubic;
use crate::error::DrawError;
use crate::layout::{FaceLayout, Rgb};

/// Drawing surface the face is stroked onto.
pub trait Canvas {
    /// Erases everything drawn so far.
    fn clear(&mut self);

    /// Strokes one arc on top of what is already drawn.
    fn stroke_arc(&mut self, arc: ArcCmd) -> Result<(), DrawError>;
}

impl Canvas for DrawList {
    fn clear(&mut self) {
        DrawList::clear(self);
    }

    fn stroke_arc(&mut self, arc: ArcCmd) -> Result<(), DrawError> {
        if !arc.is_valid() {
            return Err(DrawError::invalid(&arc));
        }
        self.push_arc(arc);
        Ok(())
    }
}

/// What to draw for one hand this frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcSpec {
    /// Progress around the wheel, `[0, 1)`.
    pub fraction: f64,
    pub radius: f32,
    pub color: Rgb,
    pub line_width: f32,
    /// Wrap-around transition, `[0, 1]`; 0 is the steady state.
    pub transition: f64,
}

/// Strokes a hand's track, 12 o'clock marker and progress arc.
///
/// Stateless between calls: the same spec on a cleared canvas always yields the
/// same strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPainter {
    center: Vec2,
    track_color: Color,
    track_width: f32,
    tick_sweep: f32,
}

impl ArcPainter {
    pub fn new(layout: &FaceLayout) -> Self {
        Self {
            center: layout.center,
            track_color: layout.track_color,
            track_width: layout.track_width,
            tick_sweep: layout.tick_sweep,
        }
    }

    /// Draws `spec` onto `canvas`, back to front.
    pub fn draw_arc<C: Canvas + ?Sized>(&self, canvas: &mut C, spec: &ArcSpec) -> Result<(), DrawError> {
        for stroke in self.strokes(spec) {
            canvas.stroke_arc(stroke)?;
        }
        Ok(())
    }

    /// Track, marker and progress arc for `spec`, in paint order.
    pub fn strokes(&self, spec: &ArcSpec) -> [ArcCmd; 3] {
        let top = -FRAC_PI_2;

        let track = self.arc(spec.radius, top, top + TAU, self.track_width, self.track_color);

        let marker = self.arc(
            spec.radius,
            top,
            top + self.tick_sweep as f64,
            spec.line_width,
            spec.color.with_alpha(1.0),
        );

        let progress = if spec.transition > 0.0 {
            // The previous revolution's ring collapses toward 12 o'clock while fading.
            let eased = ease_in_out_cubic(spec.transition);
            self.arc(
                spec.radius,
                top + (1.0 - eased) * TAU,
                top + TAU,
                spec.line_width,
                spec.color.with_alpha(eased as f32),
            )
        } else {
            self.arc(
                spec.radius,
                top,
                top + spec.fraction * TAU,
                spec.line_width,
                spec.color.with_alpha(1.0),
            )
        };

        [track, marker, progress]
    }

    fn arc(&self, radius: f32, start: f64, end: f64, width: f32, color: Color) -> ArcCmd {
        ArcCmd {
            center: self.center,
            radius,
            start_angle: start as f32,
            end_angle: end as f32,
            direction: ArcDirection::Clockwise,
            width,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcclock_engine::coords::{FULL_TURN, TWELVE_O_CLOCK};
    use arcclock_engine::scene::DrawCmd;

    use crate::layout::HandStyle;

    fn spec(fraction: f64, transition: f64) -> ArcSpec {
        let hand = HandStyle::SECONDS;
        ArcSpec {
            fraction,
            radius: hand.radius,
            color: hand.color,
            line_width: hand.line_width,
            transition,
        }
    }

    fn painter() -> ArcPainter {
        ArcPainter::new(&FaceLayout::default())
    }

    fn arcs(list: &DrawList) -> Vec<ArcCmd> {
        list.items()
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Arc(a) => a.clone(),
            })
            .collect()
    }

    // ── layers ────────────────────────────────────────────────────────────

    #[test]
    fn track_is_faint_full_circle() {
        let [track, _, _] = painter().strokes(&spec(0.3, 0.0));
        assert_eq!(track.sweep(), FULL_TURN);
        assert_eq!(track.start_angle, TWELVE_O_CLOCK);
        assert_eq!(track.width, 2.0);
        assert!((track.color.a - 0.15).abs() < 1e-6);
        assert_eq!(track.center, Vec2::new(400.0, 400.0));
    }

    #[test]
    fn marker_sits_at_twelve_in_full_color() {
        let [_, marker, _] = painter().strokes(&spec(0.3, 0.7));
        assert_eq!(marker.start_angle, TWELVE_O_CLOCK);
        assert!((marker.sweep() - 0.025).abs() < 1e-6);
        assert_eq!(marker.width, 5.0);
        assert_eq!(marker.color, Rgb::new(255, 46, 99).with_alpha(1.0));
    }

    // ── progress ──────────────────────────────────────────────────────────

    #[test]
    fn steady_sweep_matches_fraction() {
        for fraction in [0.0, 0.1, 0.5, 0.98333] {
            let [_, _, progress] = painter().strokes(&spec(fraction, 0.0));
            assert_eq!(progress.start_angle, TWELVE_O_CLOCK);
            let expected = (fraction * TAU) as f32;
            assert!((progress.sweep() - expected).abs() < 1e-5, "fraction {fraction}");
            assert_eq!(progress.color.a, 1.0);
        }
    }

    #[test]
    fn full_transition_is_whole_opaque_ring() {
        let [_, _, progress] = painter().strokes(&spec(0.0, 1.0));
        assert!((progress.sweep() - FULL_TURN).abs() < 1e-5);
        assert_eq!(progress.color.a, 1.0);
    }

    #[test]
    fn half_transition_is_half_ring_at_half_alpha() {
        let [_, _, progress] = painter().strokes(&spec(0.99, 0.5));
        assert!((progress.sweep() - FULL_TURN / 2.0).abs() < 1e-5);
        assert!((progress.end_angle - (TWELVE_O_CLOCK + FULL_TURN)).abs() < 1e-5);
        assert!((progress.color.a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn nearly_finished_transition_is_a_faint_sliver() {
        let [_, _, progress] = painter().strokes(&spec(0.0, 0.05));
        assert!(progress.sweep() < 0.01);
        assert!(progress.color.a < 0.001);
    }

    // ── canvas ────────────────────────────────────────────────────────────

    #[test]
    fn draw_arc_layers_track_marker_progress() {
        let mut list = DrawList::new();
        painter().draw_arc(&mut list, &spec(0.25, 0.0)).expect("drawable");

        let drawn = arcs(&list);
        assert_eq!(drawn.len(), 3);
        assert_eq!(drawn[0].width, 2.0);
        assert!((drawn[1].sweep() - 0.025).abs() < 1e-6);
        assert!((drawn[2].sweep() - FULL_TURN / 4.0).abs() < 1e-5);
    }

    #[test]
    fn draw_arc_is_idempotent() {
        let p = painter();
        let s = spec(0.4321, 0.37);

        let mut first = DrawList::new();
        p.draw_arc(&mut first, &s).expect("drawable");

        let mut second = DrawList::new();
        p.draw_arc(&mut second, &s).expect("drawable");
        Canvas::clear(&mut second);
        p.draw_arc(&mut second, &s).expect("drawable");

        assert_eq!(first.items(), second.items());
    }

    #[test]
    fn invalid_geometry_is_rejected_by_draw_list() {
        let mut list = DrawList::new();
        let mut bad = spec(0.5, 0.0);
        bad.radius = f32::NAN;

        let err = painter().draw_arc(&mut list, &bad).unwrap_err();
        assert!(matches!(err, DrawError::InvalidGeometry { .. }));
        assert!(list.is_empty());
    }
}
