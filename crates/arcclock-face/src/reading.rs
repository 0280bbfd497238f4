//! Per-frame clock reading and the hand math derived from it.

use chrono::{NaiveDateTime, Timelike};

use crate::easing::transition_progress;

/// Wall time decomposed for one frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct ClockReading {
    /// 0–23.
    pub hours: u32,
    /// 0–59.
    pub minutes: u32,
    /// 0–59.
    pub seconds: u32,
    /// 0–999.
    pub milliseconds: u32,
}

/// How far around its wheel each hand is, each in `[0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct HandFractions {
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

/// Which hands are in the last second before rolling over.
///
/// The conditions cascade: minutes only wrap together with seconds, hours only
/// together with minutes at the twelve-hour rollover.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Wraps {
    pub hours: bool,
    pub minutes: bool,
    pub seconds: bool,
}

/// Wrap-around transition progress per hand, each in `[0, 1]`; 0 means steady.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct HandTransitions {
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl ClockReading {
    pub const fn new(hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> Self {
        Self { hours, minutes, seconds, milliseconds }
    }

    /// Decomposes a local date-time. Leap-second nanoseconds are folded into 999 ms.
    pub fn from_datetime(dt: &NaiveDateTime) -> Self {
        Self {
            hours: dt.hour(),
            minutes: dt.minute(),
            seconds: dt.second(),
            milliseconds: (dt.nanosecond() / 1_000_000).min(999),
        }
    }

    pub fn fractions(&self) -> HandFractions {
        let h = (self.hours % 12) as f64;
        let m = self.minutes as f64;
        let s = self.seconds as f64;
        let ms = self.milliseconds as f64;

        HandFractions {
            hours: unit_fraction((h + m / 60.0 + s / 3600.0) / 12.0),
            minutes: unit_fraction((m + s / 60.0 + ms / 60_000.0) / 60.0),
            seconds: unit_fraction((s + ms / 1000.0) / 60.0),
        }
    }

    pub fn wraps(&self) -> Wraps {
        let seconds = self.seconds == 59;
        let minutes = seconds && self.minutes == 59;
        let hours = minutes && self.hours % 12 == 11;
        Wraps { hours, minutes, seconds }
    }

    /// Transition progress for every wrapping hand, measured from the start of
    /// the wrapping second.
    pub fn transitions(&self) -> HandTransitions {
        let wraps = self.wraps();
        let progress = transition_progress(self.milliseconds as f64);
        let pick = |wrapping: bool| if wrapping { progress } else { 0.0 };

        HandTransitions {
            hours: pick(wraps.hours),
            minutes: pick(wraps.minutes),
            seconds: pick(wraps.seconds),
        }
    }
}

/// Folds a revolution fraction into `[0, 1)`; a full turn reads as the start of the next.
fn unit_fraction(x: f64) -> f64 {
    debug_assert!(x >= 0.0, "negative revolution fraction {x}");
    if x >= 1.0 { x.fract() } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── fractions ─────────────────────────────────────────────────────────

    #[test]
    fn one_second_before_noon() {
        let r = ClockReading::new(11, 59, 59, 0);
        let f = r.fractions();
        assert!(close(f.hours, 0.99998, 1e-5), "hours = {}", f.hours);
        assert!(close(f.minutes, 0.99972, 1e-5), "minutes = {}", f.minutes);
        assert!(close(f.seconds, 0.98333, 1e-5), "seconds = {}", f.seconds);
    }

    #[test]
    fn all_readings_stay_in_unit_range() {
        for h in 0..24 {
            for m in 0..60 {
                for s in 0..60 {
                    for ms in [0, 500, 999] {
                        let f = ClockReading::new(h, m, s, ms).fractions();
                        for v in [f.hours, f.minutes, f.seconds] {
                            assert!((0.0..1.0).contains(&v), "{h}:{m}:{s}.{ms} -> {v}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn seconds_fraction_increases_within_a_minute() {
        let mut prev = -1.0;
        for s in 0..60 {
            for ms in [0, 250, 999] {
                let v = ClockReading::new(3, 10, s, ms).fractions().seconds;
                assert!(v > prev);
                prev = v;
            }
        }
    }

    #[test]
    fn minutes_fraction_increases_within_an_hour() {
        let mut prev = -1.0;
        for m in 0..60 {
            for s in [0, 30, 59] {
                let v = ClockReading::new(7, m, s, 0).fractions().minutes;
                assert!(v > prev);
                prev = v;
            }
        }
    }

    #[test]
    fn hours_fraction_increases_over_the_wheel_and_wraps_at_twelve() {
        let mut prev = -1.0;
        for h in 0..12 {
            let v = ClockReading::new(h, 0, 0, 0).fractions().hours;
            assert!(v > prev);
            prev = v;
        }
        assert_eq!(ClockReading::new(12, 0, 0, 0).fractions().hours, 0.0);
        assert_eq!(
            ClockReading::new(15, 30, 0, 0).fractions(),
            ClockReading::new(3, 30, 0, 0).fractions()
        );
    }

    #[test]
    fn full_turn_wraps_to_zero() {
        assert_eq!(unit_fraction(1.0), 0.0);
        assert!(close(unit_fraction(1.25), 0.25, 1e-12));
        assert_eq!(unit_fraction(0.5), 0.5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "negative revolution fraction")]
    fn negative_fraction_is_a_bug() {
        unit_fraction(-0.25);
    }

    // ── wraps / transitions ───────────────────────────────────────────────

    #[test]
    fn all_hands_wrap_one_second_before_noon() {
        let w = ClockReading::new(11, 59, 59, 0).wraps();
        assert_eq!(w, Wraps { hours: true, minutes: true, seconds: true });
        assert_eq!(ClockReading::new(23, 59, 59, 0).wraps(), w);
    }

    #[test]
    fn wraps_cascade() {
        assert_eq!(
            ClockReading::new(4, 12, 59, 0).wraps(),
            Wraps { hours: false, minutes: false, seconds: true }
        );
        assert_eq!(
            ClockReading::new(4, 59, 59, 0).wraps(),
            Wraps { hours: false, minutes: true, seconds: true }
        );
        // Minute 59 alone is not a minute wrap.
        assert_eq!(ClockReading::new(11, 59, 58, 0).wraps(), Wraps::default());
    }

    #[test]
    fn transition_halfway_at_550_ms() {
        let t = ClockReading::new(8, 20, 59, 550).transitions();
        assert_eq!(t.seconds, 0.5);
        assert_eq!(t.minutes, 0.0);
        assert_eq!(t.hours, 0.0);
    }

    #[test]
    fn transition_never_reaches_zero_inside_the_wrapping_second() {
        let t = ClockReading::new(11, 59, 59, 999).transitions();
        assert!(t.seconds > 0.0);
        assert_eq!(t.seconds, t.minutes);
        assert_eq!(t.minutes, t.hours);
    }

    #[test]
    fn steady_outside_wrapping_second() {
        assert_eq!(ClockReading::new(11, 59, 0, 0).transitions(), HandTransitions::default());
    }

    // ── from_datetime ─────────────────────────────────────────────────────

    #[test]
    fn decomposes_datetime() {
        let dt = NaiveDate::from_ymd_opt(2026, 10, 17)
            .and_then(|d| d.and_hms_milli_opt(21, 4, 33, 789))
            .expect("valid datetime");
        assert_eq!(ClockReading::from_datetime(&dt), ClockReading::new(21, 4, 33, 789));
    }

    #[test]
    fn leap_second_folds_into_last_millisecond() {
        let dt = NaiveDate::from_ymd_opt(2016, 12, 31)
            .and_then(|d| d.and_hms_milli_opt(23, 59, 59, 1_500))
            .expect("valid leap second");
        assert_eq!(ClockReading::from_datetime(&dt).milliseconds, 999);
    }
}
