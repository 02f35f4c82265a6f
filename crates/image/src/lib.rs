//! Still-image handling for captured camera frames.
//!
//! Frames arrive in whatever pixel format the device delivers (packed YUYV,
//! compressed MJPEG, or plain RGB). This crate converts them to RGB, encodes
//! them as JPEG for storage and upload, and packs them into `u32` buffers for
//! on-screen preview.

mod error;
pub use error::*;

mod image;
pub use image::*;

mod jpeg;
pub use jpeg::*;

mod pixelformat;
pub use pixelformat::*;

mod rgb;
pub use rgb::*;

mod framebuffer;
pub use framebuffer::*;
