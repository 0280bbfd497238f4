//! Paint model shared between the clock face and renderers.
//!
//! Arcs are stroked with a single solid color; gradients are out of scope.

pub mod color;

pub use color::Color;
