use core::f32::consts::{FRAC_PI_2, TAU};

/// One full revolution in radians.
pub const FULL_TURN: f32 = TAU;

/// Angle of the topmost point of a circle (12 o'clock) in screen space.
///
/// Angle 0 is 3 o'clock; with +Y down, positive angles run clockwise.
pub const TWELVE_O_CLOCK: f32 = -FRAC_PI_2;

/// Sweeps within this many radians of a full turn count as the whole circle,
/// absorbing f32 rounding of `start + 2π`.
const FULL_TURN_SLACK: f32 = 1e-5;

/// Winding used when tracing an arc from its start angle to its end angle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ArcDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl ArcDirection {
    /// Returns the swept angle of an arc from `start` to `end` in this direction.
    ///
    /// Follows 2D canvas semantics: a requested sweep of a full turn or more draws
    /// the whole circle, a negative one is reduced modulo one turn.
    pub fn sweep(self, start: f32, end: f32) -> f32 {
        let delta = match self {
            ArcDirection::Clockwise => end - start,
            ArcDirection::CounterClockwise => start - end,
        };

        if delta >= FULL_TURN - FULL_TURN_SLACK {
            FULL_TURN
        } else if delta < 0.0 {
            delta.rem_euclid(FULL_TURN)
        } else {
            delta
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clockwise_sweep_is_end_minus_start() {
        let s = ArcDirection::Clockwise.sweep(TWELVE_O_CLOCK, TWELVE_O_CLOCK + 1.25);
        assert!((s - 1.25).abs() < 1e-6);
    }

    #[test]
    fn full_turn_or_more_is_clamped() {
        let d = ArcDirection::Clockwise;
        assert_eq!(d.sweep(TWELVE_O_CLOCK, TWELVE_O_CLOCK + FULL_TURN), FULL_TURN);
        assert_eq!(d.sweep(0.0, 3.0 * FULL_TURN), FULL_TURN);
    }

    #[test]
    fn reversed_clockwise_wraps_around() {
        let s = ArcDirection::Clockwise.sweep(1.0, 0.5);
        assert!((s - (FULL_TURN - 0.5)).abs() < 1e-5);
    }

    #[test]
    fn counter_clockwise_mirrors_clockwise() {
        let s = ArcDirection::CounterClockwise.sweep(1.0, 0.25);
        assert!((s - 0.75).abs() < 1e-6);
    }
}
