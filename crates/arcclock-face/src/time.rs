//! Where the face gets "now" from.

use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::ClockError;
use crate::reading::ClockReading;

/// Milliseconds the synthetic clock advances per frame, approximating 60 fps.
pub const SYNTHETIC_FRAME_STEP_MS: i64 = 16;

/// Source of real local date-time.
pub trait WallClock {
    fn now(&self) -> NaiveDateTime;
}

/// Local system time via `chrono::Local`.
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalWallClock;

impl WallClock for LocalWallClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A wall clock stuck at one instant. Useful for tests and reproducible renders.
#[derive(Debug, Copy, Clone)]
pub struct FixedWallClock(pub NaiveDateTime);

impl WallClock for FixedWallClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Supplies the instant each frame renders.
///
/// Tracks the wall clock until [`set_override`](Self::set_override) pins it to a
/// synthetic time on today's date; from then on every [`now`](Self::now) returns
/// the synthetic instant and advances it by [`SYNTHETIC_FRAME_STEP_MS`].
#[derive(Debug, Clone)]
pub struct TimeSource<C: WallClock = LocalWallClock> {
    wall: C,
    synthetic: Option<NaiveDateTime>,
}

impl Default for TimeSource<LocalWallClock> {
    fn default() -> Self {
        Self::new(LocalWallClock)
    }
}

impl<C: WallClock> TimeSource<C> {
    pub fn new(wall: C) -> Self {
        Self { wall, synthetic: None }
    }

    /// Returns the reading for this frame.
    ///
    /// Not idempotent while an override is active: each call advances the
    /// synthetic clock by one step, so call it exactly once per frame.
    pub fn now(&mut self) -> ClockReading {
        match self.synthetic.as_mut() {
            None => ClockReading::from_datetime(&self.wall.now()),
            Some(current) => {
                let reading = ClockReading::from_datetime(current);
                match current.checked_add_signed(TimeDelta::milliseconds(SYNTHETIC_FRAME_STEP_MS)) {
                    Some(next) => *current = next,
                    None => log::warn!("synthetic clock reached the end of the calendar; holding"),
                }
                reading
            }
        }
    }

    /// Pins the clock to `hours:minutes:seconds.milliseconds` on today's date.
    ///
    /// Components are not range-checked; they add up with calendar arithmetic, so
    /// `minutes = 75` lands at the next hour plus 15 and negative values count
    /// backwards. Only totals outside chrono's calendar are refused.
    pub fn set_override(
        &mut self,
        hours: i64,
        minutes: i64,
        seconds: i64,
        milliseconds: i64,
    ) -> Result<(), ClockError> {
        let unrepresentable = || ClockError::Unrepresentable { hours, minutes, seconds, milliseconds };

        let midnight = self.wall.now().date().and_time(NaiveTime::MIN);
        let offset_ms = hours
            .checked_mul(3_600_000)
            .and_then(|h| minutes.checked_mul(60_000).and_then(|m| h.checked_add(m)))
            .and_then(|hm| seconds.checked_mul(1_000).and_then(|s| hm.checked_add(s)))
            .and_then(|hms| hms.checked_add(milliseconds))
            .ok_or_else(unrepresentable)?;

        let anchor = TimeDelta::try_milliseconds(offset_ms)
            .and_then(|offset| midnight.checked_add_signed(offset))
            .ok_or_else(unrepresentable)?;

        log::info!("clock override set to {anchor}");
        self.synthetic = Some(anchor);
        Ok(())
    }

    /// [`set_override`](Self::set_override) with zero milliseconds.
    pub fn set_override_hms(&mut self, hours: i64, minutes: i64, seconds: i64) -> Result<(), ClockError> {
        self.set_override(hours, minutes, seconds, 0)
    }

    /// Drops the override and follows the wall clock again.
    pub fn clear_override(&mut self) {
        if self.synthetic.take().is_some() {
            log::info!("clock override cleared");
        }
    }

    pub fn is_overridden(&self) -> bool {
        self.synthetic.is_some()
    }

    /// The instant the next synthetic `now()` will report, if overridden.
    pub fn synthetic_instant(&self) -> Option<NaiveDateTime> {
        self.synthetic
    }
}
