//! arcclock face.
//!
//! The clock itself, independent of windowing and GPU: a [`TimeSource`] that
//! follows the wall clock or a synthetic override, the per-frame reading math,
//! the [`ArcPainter`] that turns one hand into stroked arcs on a [`Canvas`], and
//! the [`ClockDriver`] that ties them together once per display frame.
//!
//! [`TimeSource`]: time::TimeSource
//! [`ArcPainter`]: arc::ArcPainter
//! [`Canvas`]: arc::Canvas
//! [`ClockDriver`]: driver::ClockDriver

pub mod arc;
pub mod driver;
pub mod easing;
pub mod error;
pub mod layout;
pub mod reading;
pub mod time;

pub use arc::{ArcPainter, ArcSpec, Canvas};
pub use driver::{CancelHandle, ClockDriver, FrameOutcome, FrameScheduler};
pub use error::{ClockError, DrawError};
pub use layout::{FaceLayout, HandStyle, Rgb};
pub use reading::{ClockReading, HandFractions, HandTransitions, Wraps};
pub use time::{FixedWallClock, LocalWallClock, TimeSource, WallClock};
