//! Logging shims.
//!
//! The crate never talks to a logging backend directly. Every call site goes
//! through one of the macros below, which forward to [`log`](https://docs.rs/log)
//! or [`tracing`](https://docs.rs/tracing) depending on the enabled feature.
//! Enable at most one of the two; with neither enabled the macros expand to
//! nothing and the arguments are never evaluated.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! ```ignore
//! use dashboard_navigator::{debug_log, error_log};
//!
//! debug_log!("No navigation match for '{}', splitting path", path);
//! error_log!("Error fetching navigation data from {}: {}", endpoint, err);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __dispatch_log {
    ($level:ident, $($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)*);
        #[cfg(feature = "log")]
        ::log::$level!($($arg)*);
    }};
}

/// Emit a **trace**-level message (matcher descent, mock requests).
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => { $crate::__dispatch_log!(trace, $($arg)*) };
}

/// Emit a **debug**-level message (fallbacks, stale responses, store writes).
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => { $crate::__dispatch_log!(debug, $($arg)*) };
}

/// Emit an **info**-level message.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => { $crate::__dispatch_log!(info, $($arg)*) };
}

/// Emit a **warn**-level message.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => { $crate::__dispatch_log!(warn, $($arg)*) };
}

/// Emit an **error**-level message (failed navigation fetches).
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => { $crate::__dispatch_log!(error, $($arg)*) };
}
