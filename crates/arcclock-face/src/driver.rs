//! Per-frame orchestration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::arc::{ArcPainter, ArcSpec, Canvas};
use crate::error::{ClockError, DrawError};
use crate::layout::{FaceLayout, HandStyle};
use crate::reading::ClockReading;
use crate::time::{LocalWallClock, TimeSource, WallClock};

/// Asks the host for one more frame callback.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

impl<F: FnMut()> FrameScheduler for F {
    fn request_frame(&mut self) {
        self()
    }
}

/// Stops a [`ClockDriver`] from rescheduling itself.
///
/// Cloneable; every clone controls the same driver.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// What a [`ClockDriver::tick`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// The face was drawn for this reading.
    Drawn(ClockReading),
    /// A hand failed to draw; the canvas was cleared and the frame should not be shown.
    Skipped(DrawError),
    /// The driver was cancelled before this tick; nothing was drawn or rescheduled.
    Stopped,
}

/// Draws the clock face once per frame and keeps itself scheduled until cancelled.
pub struct ClockDriver<C: WallClock = LocalWallClock> {
    time: TimeSource<C>,
    layout: FaceLayout,
    painter: ArcPainter,
    cancel: CancelHandle,
}

impl ClockDriver<LocalWallClock> {
    /// Driver following local system time with the default face.
    pub fn local() -> Self {
        Self::new(TimeSource::default(), FaceLayout::default())
    }
}

impl<C: WallClock> ClockDriver<C> {
    pub fn new(time: TimeSource<C>, layout: FaceLayout) -> Self {
        let painter = ArcPainter::new(&layout);
        Self {
            time,
            layout,
            painter,
            cancel: CancelHandle::default(),
        }
    }

    pub fn layout(&self) -> &FaceLayout {
        &self.layout
    }

    /// Public clock control: pin the face to a synthetic time on today's date.
    pub fn set_clock_time(
        &mut self,
        hours: i64,
        minutes: i64,
        seconds: i64,
        milliseconds: i64,
    ) -> Result<(), ClockError> {
        self.time.set_override(hours, minutes, seconds, milliseconds)
    }

    /// Returns to wall-clock time after [`set_clock_time`](Self::set_clock_time).
    pub fn clear_clock_time(&mut self) {
        self.time.clear_override();
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Runs one frame: clear, sample the time once, draw hours, minutes and
    /// seconds outer to inner, then request the next frame.
    ///
    /// The next frame is requested whether or not drawing succeeded; only
    /// cancellation ends the loop.
    pub fn tick<V, S>(&mut self, canvas: &mut V, scheduler: &mut S) -> FrameOutcome
    where
        V: Canvas + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        if self.cancel.is_cancelled() {
            log::debug!("clock driver cancelled; not rescheduling");
            return FrameOutcome::Stopped;
        }

        canvas.clear();
        let reading = self.time.now();
        log::trace!("frame at {reading:?}");

        let outcome = match self.draw_face(canvas, &reading) {
            Ok(()) => FrameOutcome::Drawn(reading),
            Err(err) => {
                log::warn!("skipping frame at {reading:?}: {err}");
                canvas.clear();
                FrameOutcome::Skipped(err)
            }
        };

        if !self.cancel.is_cancelled() {
            scheduler.request_frame();
        }

        outcome
    }

    fn draw_face<V: Canvas + ?Sized>(&self, canvas: &mut V, reading: &ClockReading) -> Result<(), DrawError> {
        for spec in arc_specs(reading, &self.layout) {
            self.painter.draw_arc(canvas, &spec)?;
        }
        Ok(())
    }
}

/// The three hands for `reading`, outermost (hours) first.
pub fn arc_specs(reading: &ClockReading, layout: &FaceLayout) -> [ArcSpec; 3] {
    let fractions = reading.fractions();
    let transitions = reading.transitions();

    let spec = |hand: HandStyle, fraction: f64, transition: f64| ArcSpec {
        fraction,
        radius: hand.radius,
        color: hand.color,
        line_width: hand.line_width,
        transition,
    };

    let [hours, minutes, seconds] = layout.hands();
    [
        spec(hours, fractions.hours, transitions.hours),
        spec(minutes, fractions.minutes, transitions.minutes),
        spec(seconds, fractions.seconds, transitions.seconds),
    ]
}
