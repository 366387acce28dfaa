//! Sink trait for log output destinations

use super::error::Result;

/// A byte-stream destination a level writes its lines to.
///
/// Sinks are shared behind `Arc` by every level (and every logger) routed to
/// them, so implementations serialize their own writes.
pub trait Sink: Send + Sync {
    /// Write one fully formatted line, terminator included.
    fn write(&self, bytes: &[u8]) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
