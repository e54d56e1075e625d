//! Leveled diagnostic macros over a [`LogSink`](crate::log::LogSink).
//!
//! # Feature Flags
//! Levels are controlled by cargo features:
//! `log-trace`, `log-debug`, `log-info`, `log-warn`, `log-error`.
//!
//! A disabled level still type-checks its arguments but never formats them
//! or calls the sink.

#[macro_export]
macro_rules! sink_log {
    ($sink:expr, $lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $sink.log($lvl, &__msg, module_path!());
    }};
}

// ---------------------- TRACE ----------------------
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! sink_trace { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::LogLevel::Trace, $($arg)*) } }

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! sink_trace {
    ($sink:expr, $($arg:tt)*) => {{
        let _ = &$sink;
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! sink_debug { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::LogLevel::Debug, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! sink_debug {
    ($sink:expr, $($arg:tt)*) => {{
        let _ = &$sink;
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! sink_info { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::LogLevel::Info, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! sink_info {
    ($sink:expr, $($arg:tt)*) => {{
        let _ = &$sink;
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! sink_warn { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::LogLevel::Warn, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! sink_warn {
    ($sink:expr, $($arg:tt)*) => {{
        let _ = &$sink;
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! sink_error { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::LogLevel::Error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! sink_error {
    ($sink:expr, $($arg:tt)*) => {{
        let _ = &$sink;
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}
