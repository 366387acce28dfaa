//! Console sink implementation

use crate::core::{Result, Sink};
use std::io::Write;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Writes lines to the process stdout or stderr.
///
/// The standard stream handles already serialize concurrent writers, so the
/// sink keeps no lock of its own.
#[derive(Debug)]
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Sink for ConsoleSink {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        match self.stream {
            Stream::Stdout => std::io::stdout().lock().write_all(bytes)?,
            Stream::Stderr => std::io::stderr().lock().write_all(bytes)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match self.stream {
            Stream::Stdout => std::io::stdout().flush()?,
            Stream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}

/// The process-standard output every implicitly created logger writes to.
///
/// Always returns a handle to the same stdout sink, so it can be compared
/// with [`Arc::ptr_eq`].
pub fn default_output() -> Arc<dyn Sink> {
    static DEFAULT_OUTPUT: OnceLock<Arc<dyn Sink>> = OnceLock::new();
    Arc::clone(DEFAULT_OUTPUT.get_or_init(|| Arc::new(ConsoleSink::stdout())))
}
