//! Status macros.
//!
//! Thin wrappers over `tracing` that tag events with a `sonar::*` target so the
//! terminal formatter can pick the matching symbol and color.

/// A positive finding, e.g. a host that answered.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "sonar::success", $($arg)*)
    };
}

/// Neutral progress information.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "sonar::info", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "sonar::warn", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!(target: "sonar::error", $($arg)*)
    };
}
