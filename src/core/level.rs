//! Per-severity routing and enablement state

use super::log_level::LogLevel;
use super::sink::Sink;
use std::fmt;
use std::sync::Arc;

/// One severity's configuration inside a [`Logger`](super::Logger).
///
/// The severity is fixed for the life of the level. The output and the
/// enabled flag are only changed through the owning logger.
#[derive(Clone)]
pub struct Level {
    level: LogLevel,
    output: Arc<dyn Sink>,
    enabled: bool,
}

impl Level {
    pub(crate) fn new(level: LogLevel, output: Arc<dyn Sink>) -> Self {
        Self {
            level,
            output,
            enabled: true,
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn output(&self) -> &Arc<dyn Sink> {
        &self.output
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn set_output(&mut self, output: Arc<dyn Sink>) {
        self.output = output;
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Level")
            .field("level", &self.level)
            .field("output", &self.output.name())
            .field("enabled", &self.enabled)
            .finish()
    }
}
