//! Shared primitives for the camera detector workspace: logging and sizes.

pub mod log;
pub use log::*;

mod vec2;
pub use vec2::*;
