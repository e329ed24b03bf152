//! Shared building blocks for `sonar`.
//!
//! Everything in here is free of socket I/O: the scan range model and its
//! validator, the probe result types, configuration and the status macros the
//! other crates log through.

pub mod config;
pub mod error;
pub mod macros;
pub mod network;
pub mod utils;

#[doc(hidden)]
pub use tracing;
