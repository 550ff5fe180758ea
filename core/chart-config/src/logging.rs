//! FILENAME: core/chart-config/src/logging.rs
// PURPOSE: Category-tagged logging macros shared by the drill crates.
// CONTEXT: Every line carries a short category ("DRILL", "CONFIG", "MENU")
//          which becomes the `log` target, so hosts can filter per subsystem.

#[doc(hidden)]
pub use log as __log;

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::__log::debug!(target: $cat, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::__log::info!(target: $cat, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::__log::warn!(target: $cat, $($arg)*)
    };
}
