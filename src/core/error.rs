//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The logger has no level registered under this severity code
    #[error("No log level '{level}' exists in this logger.")]
    MissingLevel { level: i32 },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create a missing level error for a severity code
    pub fn missing_level(level: i32) -> Self {
        LoggerError::MissingLevel { level }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Whether this error means the logger lacks a mandatory level
    pub fn is_missing_level(&self) -> bool {
        matches!(self, LoggerError::MissingLevel { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::missing_level(42);
        assert!(matches!(err, LoggerError::MissingLevel { level: 42 }));
        assert!(err.is_missing_level());

        let err = LoggerError::config("LoggerConfig", "Invalid level");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(!err.is_missing_level());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::missing_level(42);
        assert_eq!(err.to_string(), "No log level '42' exists in this logger.");

        let err = LoggerError::config("LoggerConfig", "unknown field");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerConfig: unknown field"
        );

        let err = LoggerError::writer("closed");
        assert_eq!(err.to_string(), "Writer error: closed");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot open for append", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("cannot open for append"));
    }
}
