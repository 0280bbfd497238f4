//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the code that
//! draws frames, without leaking winit/wgpu plumbing into it.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
