//! Serializable logger configuration

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// Settings a [`LoggerBuilder`](super::LoggerBuilder) can take in one piece,
/// typically loaded from JSON.
///
/// # Example
///
/// ```
/// use rust_named_logger::{LogLevel, LoggerConfig, TimestampFormat};
///
/// let config = LoggerConfig::from_json(
///     r#"{ "disabled_levels": ["Debug"], "timestamp_format": "Rfc3339" }"#,
/// ).unwrap();
/// assert_eq!(config.disabled_levels, vec![LogLevel::Debug]);
/// assert_eq!(config.timestamp_format, TimestampFormat::Rfc3339);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Levels that start out disabled
    pub disabled_levels: Vec<LogLevel>,
    pub timestamp_format: TimestampFormat,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn disable(mut self, level: LogLevel) -> Self {
        if !self.disabled_levels.contains(&level) {
            self.disabled_levels.push(level);
        }
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(format_str) = &self.timestamp_format {
            if format_str.is_empty() {
                return Err(LoggerError::config(
                    "timestamp_format",
                    "custom format must not be empty",
                ));
            }
            if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "timestamp_format",
                    format!("invalid strftime format '{}'", format_str),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = LoggerConfig::from_json("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.timestamp_format, TimestampFormat::Standard);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = LoggerConfig::from_json(r#"{ "min_level": "Info" }"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_unknown_level_rejected() {
        let err = LoggerConfig::from_json(r#"{ "disabled_levels": ["Trace"] }"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_invalid_custom_timestamp() {
        let err = LoggerConfig::from_json(r#"{ "timestamp_format": { "Custom": "%Q" } }"#)
            .unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerConfig::new()
            .with_timestamp_format(TimestampFormat::Custom(String::new()))
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_disable_deduplicates() {
        let config = LoggerConfig::new()
            .disable(LogLevel::Debug)
            .disable(LogLevel::Debug)
            .disable(LogLevel::Warn);
        assert_eq!(config.disabled_levels, vec![LogLevel::Debug, LogLevel::Warn]);
    }
}
