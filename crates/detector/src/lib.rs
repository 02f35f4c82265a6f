//! Capture one webcam frame and have a remote vision model describe it.
//!
//! The run is a fixed sequence of four steps:
//! [`capture`] → [`configure`] → [`analyze`] → [`report`], driven by [`run`].
//! Capture and configuration failures end the run; analysis failures only
//! degrade the report.

mod analyze;
pub use analyze::*;

mod capture;
pub use capture::*;

mod config;
pub use config::*;

mod configure;
pub use configure::*;

mod console;
pub use console::*;

mod error;
pub use error::*;

mod report;
pub use report::*;

mod run;
pub use run::*;
