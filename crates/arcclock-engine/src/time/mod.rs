//! Frame timing.
//!
//! One `FrameClock` per window; `tick()` once per presented frame yields the
//! `FrameTime` handed to the app. This is presentation timing only: what time
//! the clock face shows comes from the face crate's time source.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
