//! arcclock engine crate.
//!
//! Owns the platform + GPU runtime pieces the clock face is drawn through:
//! window loop, wgpu device, frame timing, and the renderer-agnostic draw list.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
