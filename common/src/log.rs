//! Logging macros on top of `tracing`.
//!
//! Events carry a dedicated target so the terminal formatter can tell plain
//! output and success reports apart from ordinary log lines.

/// Target of raw terminal output, rendered without any prefix.
pub const PRINT_TARGET: &str = "selsort::print";

/// Target of success reports, rendered highlighted.
pub const SUCCESS_TARGET: &str = "selsort::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!($($arg)*)
    };
}
