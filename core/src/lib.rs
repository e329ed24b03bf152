//! Probing engine for `sonar`.
//!
//! * [`scanner`]: walks a validated range and streams classified results.
//! * [`network`]: the connection-attempt seam and its TCP implementation.
//! * [`system`]: facts about the local machine shown next to a scan.

pub mod network;
pub mod scanner;
pub mod system;
