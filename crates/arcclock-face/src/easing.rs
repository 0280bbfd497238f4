//! Wrap-around transition timing.

/// How long a hand's wrap-around collapse lasts, in milliseconds.
pub const TRANSITION_DURATION_MS: f64 = 1100.0;

/// Symmetric cubic ease: `4x³` below the midpoint, `1 − (−2x + 2)³ / 2` above.
///
/// Inputs are clamped to `[0, 1]`.
pub fn ease_in_out_cubic(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

/// Remaining transition for a wrap that started `elapsed_ms` ago: 1 at the start,
/// reaching 0 after [`TRANSITION_DURATION_MS`].
pub fn transition_progress(elapsed_ms: f64) -> f64 {
    (1.0 - elapsed_ms / TRANSITION_DURATION_MS).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
    }

    #[test]
    fn midpoint_is_exactly_half() {
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
    }

    #[test]
    fn symmetric_about_midpoint() {
        for i in 0..=1000 {
            let x = i as f64 / 1000.0;
            let sum = ease_in_out_cubic(x) + ease_in_out_cubic(1.0 - x);
            assert!((sum - 1.0).abs() < 1e-12, "x = {x}: sum = {sum}");
        }
    }

    #[test]
    fn monotonically_non_decreasing() {
        let mut prev = ease_in_out_cubic(0.0);
        for i in 1..=1000 {
            let y = ease_in_out_cubic(i as f64 / 1000.0);
            assert!(y >= prev);
            prev = y;
        }
    }

    #[test]
    fn quarter_point_matches_cubic() {
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-12);
        assert!((ease_in_out_cubic(0.75) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn progress_halfway_through_the_transition() {
        assert_eq!(transition_progress(550.0), 0.5);
    }

    #[test]
    fn progress_floors_at_zero() {
        assert_eq!(transition_progress(0.0), 1.0);
        assert_eq!(transition_progress(1100.0), 0.0);
        assert_eq!(transition_progress(5000.0), 0.0);
    }
}
