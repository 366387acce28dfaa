//! Logger metrics for observability
//!
//! Counters describing what happened to the writes a logger was asked for:
//! how many reached a sink, how many were suppressed by a disabled level,
//! and how many failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Per-logger write counters
///
/// # Example
///
/// ```
/// use rust_named_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.total_written(), 1);
/// assert_eq!(metrics.suppressed_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines handed to a sink successfully
    total_written: AtomicU64,

    /// Writes skipped because their level was disabled
    suppressed_count: AtomicU64,

    /// Writes whose sink returned an error
    failed_count: AtomicU64,

    /// Writes addressed to a severity the logger does not carry
    missing_level_count: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_written: AtomicU64::new(0),
            suppressed_count: AtomicU64::new(0),
            failed_count: AtomicU64::new(0),
            missing_level_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_written(&self) -> u64 {
        self.total_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn missing_level_count(&self) -> u64 {
        self.missing_level_count.load(Ordering::Relaxed)
    }

    /// Record a line written to its sink. Returns the previous value.
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.total_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_missing_level(&self) -> u64 {
        self.missing_level_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Failure rate as a percentage (0.0 - 100.0) of attempted sink writes
    ///
    /// Returns 0.0 if nothing has been written yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_count() as f64;
        let total = self.total_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.total_written.store(0, Ordering::Relaxed);
        self.suppressed_count.store(0, Ordering::Relaxed);
        self.failed_count.store(0, Ordering::Relaxed);
        self.missing_level_count.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            total_written: AtomicU64::new(self.total_written()),
            suppressed_count: AtomicU64::new(self.suppressed_count()),
            failed_count: AtomicU64::new(self.failed_count()),
            missing_level_count: AtomicU64::new(self.missing_level_count()),
        }
    }
}
