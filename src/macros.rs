//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They route
//! through [`Logger::log_args`](crate::Logger::log_args), so a formatting
//! failure degrades to a placeholder message instead of failing the call.
//!
//! # Examples
//!
//! ```
//! use logtree::prelude::*;
//! use logtree::info;
//!
//! let logger = Logger::get("macros.docs");
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use logtree::prelude::*;
/// # let logger = Logger::get("macros.log");
/// use logtree::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_args($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use logtree::prelude::*;
/// # let logger = Logger::get("macros.debug");
/// use logtree::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use logtree::prelude::*;
/// # let logger = Logger::get("macros.info");
/// use logtree::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use logtree::prelude::*;
/// # let logger = Logger::get("macros.warning");
/// use logtree::warning;
/// warning!(logger, "Low disk space");
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use logtree::prelude::*;
/// # let logger = Logger::get("macros.error");
/// use logtree::error;
/// error!(logger, "Failed to open socket");
/// error!(logger, "Error code: {}, message: {}", 500, "internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use logtree::prelude::*;
/// # let logger = Logger::get("macros.critical");
/// use logtree::critical;
/// critical!(logger, "Unrecoverable failure");
/// critical!(logger, "Cannot continue: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Critical, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Level, Logger};

    #[test]
    fn test_log_macro() {
        let logger = Logger::get("macro_tests.log");
        log!(logger, Level::Info, "Test message");
        log!(logger, Level::Info, "Formatted: {}", 42);
    }

    #[test]
    fn test_debug_macro() {
        let logger = Logger::get("macro_tests.debug");
        debug!(logger, "Debug message");
        debug!(logger, "Count: {}", 5);
    }

    #[test]
    fn test_info_macro() {
        let logger = Logger::get("macro_tests.info");
        info!(logger, "Info message");
        info!(logger, "Items: {}", 100);
    }

    #[test]
    fn test_warning_macro() {
        let logger = Logger::get("macro_tests.warning");
        warning!(logger, "Warning message");
        warning!(logger, "Retry {} of {}", 1, 3);
    }

    #[test]
    fn test_error_macro() {
        let logger = Logger::get("macro_tests.error");
        error!(logger, "Error message");
        error!(logger, "Code: {}", 500);
    }

    #[test]
    fn test_critical_macro() {
        let logger = Logger::get("macro_tests.critical");
        critical!(logger, "Critical message");
        critical!(logger, "Failure: {}", "io");
    }
}
