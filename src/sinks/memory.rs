//! In-memory sink

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// A growable in-memory buffer.
///
/// Clones share the same buffer, so a caller can keep one handle to inspect
/// what a logger wrote through another.
///
/// # Example
///
/// ```
/// use rust_named_logger::{Logger, MemorySink};
/// use std::sync::Arc;
///
/// let buffer = MemorySink::new();
/// let logger = Logger::builder("svc").output(Arc::new(buffer.clone())).build();
/// logger.info(&[&"started"]);
/// assert!(buffer.contents().starts_with("[INFO] "));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, bytes: &[u8]) -> Result<()> {
        self.buffer.lock().extend_from_slice(bytes);
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        assert!(handle.is_empty());

        sink.write(b"hello ").unwrap();
        sink.write(b"world").unwrap();

        assert_eq!(handle.contents(), "hello world");
        assert_eq!(handle.len(), 11);

        handle.clear();
        assert!(sink.is_empty());
    }
}
