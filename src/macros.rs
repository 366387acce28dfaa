//! Logging macros for ergonomic operand lists and format strings.
//!
//! The print-style and line-style methods take a slice of operands; these
//! macros build that slice from a plain argument list. The `…f!` variants
//! forward to `format_args!`.
//!
//! # Examples
//!
//! ```
//! use rust_named_logger::prelude::*;
//! use rust_named_logger::{info, infof, infoln};
//! use std::sync::Arc;
//!
//! let buffer = MemorySink::new();
//! let logger = Logger::new("svc", Arc::new(buffer.clone()));
//!
//! let port = 8080;
//! info!(logger, "listening on ", port);
//! infof!(logger, "listening on {}", port);
//! infoln!(logger, "listening on", port);
//!
//! assert_eq!(buffer.contents().matches("listening on 8080").count(), 3);
//! ```

/// Print-style write to any severity; evaluates to the `Result`.
///
/// ```
/// # use rust_named_logger::prelude::*;
/// # let logger = Logger::new("svc", std::sync::Arc::new(MemorySink::new()));
/// use rust_named_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// assert!(log!(logger, 42, "code ", 500).is_err());
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, &[$(&$arg as &dyn $crate::Operand),*])
    };
}

/// `format_args!`-style write to any severity; evaluates to the `Result`.
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Line-style write to any severity; evaluates to the `Result`.
#[macro_export]
macro_rules! logln {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $logger.logln($level, &[$(&$arg as &dyn $crate::Operand),*])
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug(&[$(&$arg as &dyn $crate::Operand),*])
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info(&[$(&$arg as &dyn $crate::Operand),*])
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn(&[$(&$arg as &dyn $crate::Operand),*])
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(&[$(&$arg as &dyn $crate::Operand),*])
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debugln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debugln(&[$(&$arg as &dyn $crate::Operand),*])
    };
}

#[macro_export]
macro_rules! infoln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.infoln(&[$(&$arg as &dyn $crate::Operand),*])
    };
}

#[macro_export]
macro_rules! warnln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warnln(&[$(&$arg as &dyn $crate::Operand),*])
    };
}

#[macro_export]
macro_rules! errorln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.errorln(&[$(&$arg as &dyn $crate::Operand),*])
    };
}
