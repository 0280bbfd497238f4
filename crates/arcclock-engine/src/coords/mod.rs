//! Coordinate and geometry types shared by the draw list and renderers.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down, so increasing angles sweep clockwise on screen
//!
//! Renderers convert to NDC in shaders using a viewport uniform.

mod angle;
mod vec2;
mod viewport;

pub use angle::{ArcDirection, FULL_TURN, TWELVE_O_CLOCK};
pub use vec2::Vec2;
pub use viewport::Viewport;
