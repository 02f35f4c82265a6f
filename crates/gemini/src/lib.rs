//! Blocking client for the Gemini `generateContent` REST endpoint.

mod client;
pub use client::*;

mod error;
pub use error::*;

mod types;
pub use types::*;
