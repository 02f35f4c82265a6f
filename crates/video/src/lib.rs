//! Single-frame video capture for the camera detector.
//!
//! Devices implement `VideoInDevice`; callers go through `OpenDevice`, which
//! releases the hardware handle when it goes out of scope.

mod error;
pub use error::*;

mod videoframe;
pub use videoframe::*;

mod videoin;
pub use videoin::*;

mod preview;
pub use preview::*;
