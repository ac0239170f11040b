//! Leveled logging macros
//!
//! Each macro accepts a format string with optional arguments, or any single
//! `Display` expression:
//!
//! ```
//! use dave_logs::{log_critical, log_info, log_trace};
//!
//! let b = 5;
//! log_trace!("Constructor called with b = {b}");
//! log_info!("Attempting to connect to the {}...", "database");
//!
//! let err = std::io::Error::other("Negative value not allowed");
//! log_critical!(err);
//! ```
//!
//! With the `strip` feature the macros expand to dead code: arguments are
//! type-checked but never evaluated, and nothing is locked or written.

#[cfg(not(feature = "strip"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:expr, $msg:literal $(,)?) => {
        $crate::__private::dispatch($level, ::core::format_args!($msg), $crate::__call_site!())
    };
    ($level:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::__private::dispatch(
            $level,
            ::core::format_args!($fmt, $($arg)+),
            $crate::__call_site!(),
        )
    };
    ($level:expr, $msg:expr $(,)?) => {
        $crate::__private::dispatch(
            $level,
            ::core::format_args!("{}", $msg),
            $crate::__call_site!(),
        )
    };
}

#[cfg(feature = "strip")]
#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:expr, $msg:literal $(,)?) => {
        if false {
            $crate::__private::discard($level, ::core::format_args!($msg));
        }
    };
    ($level:expr, $fmt:literal, $($arg:tt)+) => {
        if false {
            $crate::__private::discard($level, ::core::format_args!($fmt, $($arg)+));
        }
    };
    ($level:expr, $msg:expr $(,)?) => {
        if false {
            $crate::__private::discard($level, ::core::format_args!("{}", $msg));
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __call_site {
    () => {
        $crate::CallSite::new(::core::file!(), ::core::line!(), $crate::function_name!())
    };
}

/// Log at [`Level::Trace`](crate::Level::Trace)
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)+) => {
        $crate::__log!($crate::Level::Trace, $($arg)+)
    };
}

/// Log at [`Level::Debug`](crate::Level::Debug)
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::__log!($crate::Level::Debug, $($arg)+)
    };
}

/// Log at [`Level::Info`](crate::Level::Info)
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::__log!($crate::Level::Info, $($arg)+)
    };
}

/// Log at [`Level::Warning`](crate::Level::Warning)
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)+) => {
        $crate::__log!($crate::Level::Warning, $($arg)+)
    };
}

/// Log at [`Level::Error`](crate::Level::Error)
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::__log!($crate::Level::Error, $($arg)+)
    };
}

/// Log at [`Level::Critical`](crate::Level::Critical)
#[macro_export]
macro_rules! log_critical {
    ($($arg:tt)+) => {
        $crate::__log!($crate::Level::Critical, $($arg)+)
    };
}
