//! Name → logger directory

use super::logger::Logger;
use super::sink::Sink;
use crate::sinks::default_output;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// A directory of loggers keyed by name.
///
/// Most programs use the process-wide instance through
/// [`create_logger`](crate::create_logger) and
/// [`get_logger`](crate::get_logger); an owned `Registry` gives a caller (or
/// a test) an isolated directory with the same semantics.
///
/// # Example
///
/// ```
/// use rust_named_logger::{MemorySink, Registry};
/// use std::sync::Arc;
///
/// let registry = Registry::new();
/// let created = registry.create_logger("svc", Arc::new(MemorySink::new()));
/// let fetched = registry.get_logger("svc");
/// assert!(Arc::ptr_eq(&created, &fetched));
/// ```
pub struct Registry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
    default_output: Arc<dyn Sink>,
}

impl Registry {
    /// An empty registry whose implicit loggers write to stdout
    pub fn new() -> Self {
        Self::with_default_output(default_output())
    }

    /// An empty registry whose implicit loggers write to `output`
    pub fn with_default_output(output: Arc<dyn Sink>) -> Self {
        Self {
            loggers: RwLock::new(HashMap::new()),
            default_output: output,
        }
    }

    /// The process-wide registry, created on first use and never torn down.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Create a logger routed to `output` and register it under `name`.
    ///
    /// Any logger previously registered under `name` is replaced; holders of
    /// the old instance keep using it, detached from the registry.
    pub fn create_logger(&self, name: impl Into<String>, output: Arc<dyn Sink>) -> Arc<Logger> {
        self.register(Logger::new(name, output))
    }

    /// Register an already built logger under its own name, replacing any
    /// previous entry.
    pub fn register(&self, logger: Logger) -> Arc<Logger> {
        let logger = Arc::new(logger);
        self.loggers
            .write()
            .insert(logger.name().to_string(), Arc::clone(&logger));
        logger
    }

    /// Return the logger registered under `name`, creating one routed to the
    /// default output if there is none.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.get(name) {
            return logger;
        }

        // Another thread may have created it between the two locks
        let mut loggers = self.loggers.write();
        let logger = loggers.entry(name.to_string()).or_insert_with(|| {
            Arc::new(Logger::new(name, Arc::clone(&self.default_output)))
        });
        Arc::clone(logger)
    }

    /// Look a logger up without creating it
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Forget every registered logger
    pub fn clear(&self) {
        self.loggers.write().clear();
    }

    pub fn default_output(&self) -> &Arc<dyn Sink> {
        &self.default_output
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        f.debug_struct("Registry")
            .field("loggers", &names)
            .field("default_output", &self.default_output.name())
            .finish()
    }
}

/// Create a logger in the process-wide registry, replacing any logger of the
/// same name.
pub fn create_logger(name: impl Into<String>, output: Arc<dyn Sink>) -> Arc<Logger> {
    Registry::global().create_logger(name, output)
}

/// Fetch a logger from the process-wide registry, creating one that writes to
/// stdout if `name` is new.
pub fn get_logger(name: &str) -> Arc<Logger> {
    Registry::global().get_logger(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use crate::sinks::MemorySink;

    #[test]
    fn test_create_registers() {
        let registry = Registry::new();
        let output: Arc<dyn Sink> = Arc::new(MemorySink::new());
        let logger = registry.create_logger("test", Arc::clone(&output));

        assert_eq!(logger.name(), "test");
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("test"));
        for entry in logger.levels() {
            assert!(Arc::ptr_eq(entry.output(), &output));
        }
    }

    #[test]
    fn test_get_existing() {
        let registry = Registry::new();
        let expected = registry.create_logger("test", Arc::new(MemorySink::new()));
        let actual = registry.get_logger("test");
        assert!(Arc::ptr_eq(&expected, &actual));
    }

    #[test]
    fn test_get_new_uses_default_output() {
        let registry = Registry::new();
        assert!(registry.is_empty());

        let logger = registry.get_logger("test");
        let default = default_output();
        assert_eq!(logger.levels().len(), 4);
        for entry in logger.levels() {
            assert!(entry.is_enabled());
            assert!(Arc::ptr_eq(entry.output(), &default));
        }
        assert!(Arc::ptr_eq(&logger, &registry.get_logger("test")));
    }

    #[test]
    fn test_create_overwrites() {
        let registry = Registry::new();
        let first = MemorySink::new();
        let second = MemorySink::new();
        let old = registry.create_logger("test", Arc::new(first.clone()));
        let new = registry.create_logger("test", Arc::new(second.clone()));

        let fetched = registry.get_logger("test");
        assert!(Arc::ptr_eq(&fetched, &new));
        assert!(!Arc::ptr_eq(&fetched, &old));
        assert_eq!(registry.len(), 1);

        fetched.info(&[&"hello"]);
        assert!(first.is_empty());
        assert!(second.contents().contains("hello"));

        // the orphaned instance still works
        old.info(&[&"orphan"]);
        assert!(first.contents().contains("orphan"));
    }

    #[test]
    fn test_custom_default_output() {
        let buffer = MemorySink::new();
        let registry = Registry::with_default_output(Arc::new(buffer.clone()));
        registry.get_logger("implicit").warn(&[&"careful"]);
        assert!(buffer.contents().starts_with("[WARN] "));
        assert_eq!(registry.default_output().name(), "memory");
    }

    #[test]
    fn test_register_built_logger() {
        let registry = Registry::new();
        let logger = Logger::builder("built")
            .output(Arc::new(MemorySink::new()))
            .disable(LogLevel::Debug)
            .register(&registry);

        let fetched = registry.get("built").expect("registered");
        assert!(Arc::ptr_eq(&logger, &fetched));
        assert!(!fetched.is_enabled(LogLevel::Debug));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_clear() {
        let registry = Registry::new();
        registry.get_logger("a");
        registry.get_logger("b");
        assert_eq!(registry.len(), 2);
        registry.clear();
        assert!(registry.is_empty());
        assert!(format!("{:?}", registry).contains("Registry"));
    }
}
