//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    format::{sprint, sprintln, Operand},
    level::Level,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    registry::Registry,
    sink::Sink,
    timestamp::TimestampFormat,
};
use crate::sinks::default_output;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A named logger with one independently configurable [`Level`] per
/// severity.
///
/// Every logger carries all four severities from construction on. The
/// generic `log`/`logf`/`logln` entry points take any severity code and
/// report an unknown one as [`LoggerError::MissingLevel`]; the per-severity
/// wrappers (`info`, `warnf`, `errorln`, ...) treat that error as a broken
/// invariant and abort the process.
pub struct Logger {
    name: String,
    levels: RwLock<HashMap<i32, Level>>,
    timestamp_format: TimestampFormat,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create an unregistered logger with every level enabled and routed to
    /// `output`.
    ///
    /// Use [`create_logger`](crate::create_logger) or
    /// [`Registry::create_logger`] to make it reachable by name.
    #[must_use]
    pub fn new(name: impl Into<String>, output: Arc<dyn Sink>) -> Self {
        Self::with_timestamp_format(name, output, TimestampFormat::default())
    }

    fn with_timestamp_format(
        name: impl Into<String>,
        output: Arc<dyn Sink>,
        timestamp_format: TimestampFormat,
    ) -> Self {
        let levels = LogLevel::ALL
            .into_iter()
            .map(|level| (level.code(), Level::new(level, Arc::clone(&output))))
            .collect();

        Self {
            name: name.into(),
            levels: RwLock::new(levels),
            timestamp_format,
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Write counters for this logger
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Stop the given level from writing. Unknown severities are ignored.
    pub fn disable_level(&self, level: impl Into<i32>) {
        if let Some(entry) = self.levels.write().get_mut(&level.into()) {
            entry.set_enabled(false);
        }
    }

    /// Let the given level write again. Unknown severities are ignored.
    pub fn enable_level(&self, level: impl Into<i32>) {
        if let Some(entry) = self.levels.write().get_mut(&level.into()) {
            entry.set_enabled(true);
        }
    }

    /// Whether the level exists and is enabled
    pub fn is_enabled(&self, level: impl Into<i32>) -> bool {
        self.levels
            .read()
            .get(&level.into())
            .is_some_and(Level::is_enabled)
    }

    /// Route one level to a different sink. Unknown severities are ignored.
    pub fn set_output(&self, level: impl Into<i32>, output: Arc<dyn Sink>) {
        if let Some(entry) = self.levels.write().get_mut(&level.into()) {
            entry.set_output(output);
        }
    }

    /// Route every level to the same sink
    pub fn set_all_outputs(&self, output: Arc<dyn Sink>) {
        for entry in self.levels.write().values_mut() {
            entry.set_output(Arc::clone(&output));
        }
    }

    /// The sink a level currently writes to
    pub fn output(&self, level: impl Into<i32>) -> Option<Arc<dyn Sink>> {
        self.levels
            .read()
            .get(&level.into())
            .map(|entry| Arc::clone(entry.output()))
    }

    /// Snapshot of one level's configuration
    pub fn level(&self, level: impl Into<i32>) -> Option<Level> {
        self.levels.read().get(&level.into()).cloned()
    }

    /// Snapshot of every level, ordered by severity code
    pub fn levels(&self) -> Vec<Level> {
        let mut levels: Vec<Level> = self.levels.read().values().cloned().collect();
        levels.sort_by_key(|entry| entry.level());
        levels
    }

    /// Flush every distinct sink this logger writes to
    pub fn flush(&self) -> Result<()> {
        let mut outputs: Vec<Arc<dyn Sink>> = Vec::new();
        for entry in self.levels.read().values() {
            if !outputs.iter().any(|seen| Arc::ptr_eq(seen, entry.output())) {
                outputs.push(Arc::clone(entry.output()));
            }
        }
        for output in outputs {
            output.flush()?;
        }
        Ok(())
    }

    /// Write to `level`, joining `args` print-style.
    ///
    /// Returns `Ok(())` without writing when the level is disabled, and
    /// [`LoggerError::MissingLevel`] when the logger has no such level.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_named_logger::{LogLevel, Logger, MemorySink};
    /// use std::sync::Arc;
    ///
    /// let buffer = MemorySink::new();
    /// let logger = Logger::new("svc", Arc::new(buffer.clone()));
    ///
    /// logger.log(LogLevel::Debug, &[&"hello ", &1234]).unwrap();
    /// assert!(buffer.contents().starts_with("[DEBUG] "));
    /// assert!(buffer.contents().ends_with(" hello 1234\n"));
    ///
    /// assert!(logger.log(42, &[&"x"]).is_err());
    /// ```
    pub fn log(&self, level: impl Into<i32>, args: &[&dyn Operand]) -> Result<()> {
        self.emit(level.into(), || sprint(args))
    }

    /// Write to `level` using `format_args!` directives.
    pub fn logf(&self, level: impl Into<i32>, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(level.into(), || fmt::format(args))
    }

    /// Write to `level`, separating every operand with a space.
    pub fn logln(&self, level: impl Into<i32>, args: &[&dyn Operand]) -> Result<()> {
        self.emit(level.into(), || sprintln(args))
    }

    fn emit(&self, code: i32, payload: impl FnOnce() -> String) -> Result<()> {
        // Resolve the route under the read lock, write without it
        let (level, output) = {
            let levels = self.levels.read();
            let Some(entry) = levels.get(&code) else {
                self.metrics.record_missing_level();
                return Err(LoggerError::missing_level(code));
            };
            if !entry.is_enabled() {
                self.metrics.record_suppressed();
                return Ok(());
            }
            (entry.level(), Arc::clone(entry.output()))
        };

        let line = self.format_line(level, &payload());
        match output.write(line.as_bytes()) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                self.metrics.record_failed();
                eprintln!(
                    "[LOGGER ERROR] Logger '{}' failed to write to {} sink: {}",
                    self.name,
                    output.name(),
                    e
                );
            }
        }
        Ok(())
    }

    /// `<prefix><timestamp> <payload>`, terminated by exactly one newline
    /// unless the payload already ends in one.
    fn format_line(&self, level: LogLevel, payload: &str) -> String {
        let timestamp = self.timestamp_format.now();
        let mut line =
            String::with_capacity(level.prefix().len() + timestamp.len() + payload.len() + 2);
        line.push_str(level.prefix());
        line.push_str(&timestamp);
        line.push(' ');
        line.push_str(payload);
        if !payload.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    /// Escalate the result of a per-severity convenience call.
    ///
    /// A missing level can only come from a logger built without its
    /// mandatory severities, so the process is aborted.
    fn require(&self, level: LogLevel, result: Result<()>) {
        if let Err(e) = result {
            eprintln!(
                "[LOGGER CRITICAL] Logger '{}' must have {} log level: {}",
                self.name, level, e
            );
            std::process::abort();
        }
    }

    #[inline]
    pub fn debug(&self, args: &[&dyn Operand]) {
        self.require(LogLevel::Debug, self.log(LogLevel::Debug, args));
    }

    #[inline]
    pub fn info(&self, args: &[&dyn Operand]) {
        self.require(LogLevel::Info, self.log(LogLevel::Info, args));
    }

    #[inline]
    pub fn warn(&self, args: &[&dyn Operand]) {
        self.require(LogLevel::Warn, self.log(LogLevel::Warn, args));
    }

    #[inline]
    pub fn error(&self, args: &[&dyn Operand]) {
        self.require(LogLevel::Error, self.log(LogLevel::Error, args));
    }

    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.require(LogLevel::Debug, self.logf(LogLevel::Debug, args));
    }

    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.require(LogLevel::Info, self.logf(LogLevel::Info, args));
    }

    #[inline]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.require(LogLevel::Warn, self.logf(LogLevel::Warn, args));
    }

    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.require(LogLevel::Error, self.logf(LogLevel::Error, args));
    }

    #[inline]
    pub fn debugln(&self, args: &[&dyn Operand]) {
        self.require(LogLevel::Debug, self.logln(LogLevel::Debug, args));
    }

    #[inline]
    pub fn infoln(&self, args: &[&dyn Operand]) {
        self.require(LogLevel::Info, self.logln(LogLevel::Info, args));
    }

    #[inline]
    pub fn warnln(&self, args: &[&dyn Operand]) {
        self.require(LogLevel::Warn, self.logln(LogLevel::Warn, args));
    }

    #[inline]
    pub fn errorln(&self, args: &[&dyn Operand]) {
        self.require(LogLevel::Error, self.logln(LogLevel::Error, args));
    }

    /// Write to the error level, then panic with the message as payload.
    ///
    /// The panic happens whether or not the error level is enabled.
    pub fn panic(&self, args: &[&dyn Operand]) -> ! {
        let message = sprint(args);
        let _ = self.log(LogLevel::Error, &[&message]);
        panic!("{}", message);
    }

    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = fmt::format(args);
        let _ = self.log(LogLevel::Error, &[&message]);
        panic!("{}", message);
    }

    pub fn panicln(&self, args: &[&dyn Operand]) -> ! {
        let message = sprintln(args);
        let _ = self.log(LogLevel::Error, &[&message]);
        panic!("{}", message);
    }

    /// Write to the error level, then exit the process with status 1.
    pub fn fatal(&self, args: &[&dyn Operand]) -> ! {
        let _ = self.log(LogLevel::Error, args);
        self.exit_fatal()
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.logf(LogLevel::Error, args);
        self.exit_fatal()
    }

    pub fn fatalln(&self, args: &[&dyn Operand]) -> ! {
        let _ = self.logln(LogLevel::Error, args);
        self.exit_fatal()
    }

    fn exit_fatal(&self) -> ! {
        if let Some(output) = self.output(LogLevel::Error) {
            if let Err(e) = output.flush() {
                eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
            }
        }
        std::process::exit(1)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("levels", &self.levels())
            .field("timestamp_format", &self.timestamp_format)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_named_logger::prelude::*;
/// use std::sync::Arc;
///
/// let errors = MemorySink::new();
/// let logger = Logger::builder("worker")
///     .level_output(LogLevel::Error, Arc::new(errors.clone()))
///     .disable(LogLevel::Debug)
///     .timestamp_format(TimestampFormat::Iso8601)
///     .build();
///
/// logger.debug(&[&"hidden"]);
/// logger.errorf(format_args!("code={}", 500));
/// assert!(errors.contents().contains("code=500"));
/// ```
pub struct LoggerBuilder {
    name: String,
    output: Option<Arc<dyn Sink>>,
    level_outputs: Vec<(LogLevel, Arc<dyn Sink>)>,
    disabled: Vec<LogLevel>,
    timestamp_format: TimestampFormat,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output: None,
            level_outputs: Vec::new(),
            disabled: Vec::new(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Sink shared by every level without its own route.
    ///
    /// Defaults to [`default_output`].
    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, output: Arc<dyn Sink>) -> Self {
        self.output = Some(output);
        self
    }

    /// Route one level to its own sink
    #[must_use = "builder methods return a new value"]
    pub fn level_output(mut self, level: LogLevel, output: Arc<dyn Sink>) -> Self {
        self.level_outputs.push((level, output));
        self
    }

    /// Start with `level` disabled
    #[must_use = "builder methods return a new value"]
    pub fn disable(mut self, level: LogLevel) -> Self {
        self.disabled.push(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Apply a loaded configuration on top of the current settings
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: &LoggerConfig) -> Self {
        self.disabled.extend(config.disabled_levels.iter().copied());
        self.timestamp_format = config.timestamp_format.clone();
        self
    }

    /// Build an unregistered Logger
    pub fn build(self) -> Logger {
        let output = self.output.unwrap_or_else(default_output);
        let logger = Logger::with_timestamp_format(self.name, output, self.timestamp_format);

        for (level, output) in self.level_outputs {
            logger.set_output(level, output);
        }
        for level in self.disabled {
            logger.disable_level(level);
        }

        logger
    }

    /// Build the Logger and register it, replacing any logger of the same
    /// name.
    pub fn register(self, registry: &Registry) -> Arc<Logger> {
        registry.register(self.build())
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}
