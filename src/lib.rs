//! # Rust Named Logger
//!
//! Named loggers whose debug, info, warn and error levels are configured
//! independently, plus a process-wide registry that hands out one shared
//! logger per name.
//!
//! ## Features
//!
//! - **Per-level control**: enable, disable and reroute each severity on its own
//! - **Get-or-create registry**: `get_logger(name)` always returns the same instance
//! - **Three formatting styles**: print-style, `format_args!`, and line-style
//! - **Thread Safe**: registry and level tables are lock-protected
//!
//! ```
//! use rust_named_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let buffer = MemorySink::new();
//! let logger = create_logger("svc", Arc::new(buffer.clone()));
//!
//! logger.info(&[&"started"]);
//! logger.disable_level(LogLevel::Debug);
//! logger.debugf(format_args!("hidden {}", 1));
//!
//! assert!(buffer.contents().contains("[INFO] "));
//! assert!(!buffer.contents().contains("hidden"));
//! assert!(Arc::ptr_eq(&logger, &get_logger("svc")));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        create_logger, get_logger, Level, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, Operand, Registry, Result, Sink, TimestampFormat,
    };
    pub use crate::sinks::{default_output, ConsoleSink, FileSink, MemorySink, WriterSink};
}

pub use crate::core::{
    create_logger, get_logger, sprint, sprintln, Level, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Operand, Registry, Result, Sink, TimestampFormat,
};
pub use sinks::{default_output, ConsoleSink, FileSink, MemorySink, WriterSink};
