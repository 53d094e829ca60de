//! Micro-benchmark subjects for status code decoding and record formatting.
//!
//! The library exposes pure, repeatedly callable functions; the criterion
//! bench targets under `benches/` drive them, and the `decode-bench` binary
//! prints their output for inspection.

pub mod app;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod fixtures;
pub mod format;
pub mod logger;

pub use error::{AppError, AppResult};
