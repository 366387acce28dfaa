//! Core logger types and traits

pub mod config;
pub mod error;
pub mod format;
pub mod level;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod sink;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use format::{sprint, sprintln, Operand};
pub use level::Level;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use registry::{create_logger, get_logger, Registry};
pub use sink::Sink;
pub use timestamp::TimestampFormat;
