//! Shape renderers.

mod common;

pub mod arc;
