//! Property-based tests for rust_named_logger using proptest

use proptest::prelude::*;
use rust_named_logger::prelude::*;
use rust_named_logger::{sprint, sprintln};
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that codes roundtrip and unknown codes are rejected
    #[test]
    fn test_log_level_code_roundtrip(code in any::<i32>()) {
        match LogLevel::try_from(code) {
            Ok(level) => {
                prop_assert_eq!(level.code(), code);
            }
            Err(rejected) => {
                prop_assert_eq!(rejected, code);
                prop_assert!(!(0..4).contains(&code));
            }
        }
    }

    /// Test that the prefix always wraps the level name
    #[test]
    fn test_log_level_prefix(level in any_level()) {
        prop_assert_eq!(level.prefix(), format!("[{}] ", level));
    }

    /// Test that parsing accepts case-insensitive input
    #[test]
    fn test_log_level_case_insensitive(level in any_level(), use_lower in any::<bool>()) {
        let input = if use_lower {
            level.to_str().to_lowercase()
        } else {
            level.to_str().to_string()
        };
        prop_assert_eq!(input.parse::<LogLevel>(), Ok(level));
    }
}

// ============================================================================
// Joining Rule Tests
// ============================================================================

proptest! {
    /// Text operands are concatenated without separators
    #[test]
    fn test_sprint_text_concatenates(parts in prop::collection::vec("[a-z]{0,8}", 0..6)) {
        let operands: Vec<&dyn Operand> = parts.iter().map(|p| p as &dyn Operand).collect();
        prop_assert_eq!(sprint(&operands), parts.concat());
    }

    /// Non-text operands are separated by single spaces
    #[test]
    fn test_sprint_numbers_are_spaced(values in prop::collection::vec(any::<i64>(), 0..6)) {
        let operands: Vec<&dyn Operand> = values.iter().map(|v| v as &dyn Operand).collect();
        let expected: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        prop_assert_eq!(sprint(&operands), expected.join(" "));
    }

    /// Line-style always spaces operands and ends in exactly one newline
    #[test]
    fn test_sprintln_layout(parts in prop::collection::vec("[a-z]{1,8}", 0..6)) {
        let operands: Vec<&dyn Operand> = parts.iter().map(|p| p as &dyn Operand).collect();
        let out = sprintln(&operands);
        prop_assert_eq!(out, format!("{}\n", parts.join(" ")));
    }
}

// ============================================================================
// Logger Tests
// ============================================================================

proptest! {
    /// Every write produces exactly one line carrying its level's prefix
    #[test]
    fn test_one_line_per_write(level in any_level(), message in "[a-zA-Z0-9 ]{0,40}") {
        let buffer = MemorySink::new();
        let logger = Logger::new("prop", Arc::new(buffer.clone()));

        logger.log(level, &[&message]).unwrap();

        let out = buffer.contents();
        prop_assert!(out.starts_with(level.prefix()));
        prop_assert!(out.ends_with('\n'));
        prop_assert_eq!(out.lines().count(), 1);
    }

    /// Only the disabled levels are suppressed
    #[test]
    fn test_disabled_set_is_exact(disabled in prop::collection::vec(any_level(), 0..4)) {
        let buffer = MemorySink::new();
        let logger = Logger::new("prop", Arc::new(buffer.clone()));
        for level in &disabled {
            logger.disable_level(*level);
        }

        for level in LogLevel::ALL {
            logger.log(level, &[&"x"]).unwrap();
        }

        let out = buffer.contents();
        for level in LogLevel::ALL {
            prop_assert_eq!(out.contains(level.prefix()), !disabled.contains(&level));
        }
    }

    /// Codes outside the four severities never write
    #[test]
    fn test_unknown_codes_never_write(code in any::<i32>().prop_filter("unknown", |c| !(0..4).contains(c))) {
        let buffer = MemorySink::new();
        let logger = Logger::new("prop", Arc::new(buffer.clone()));

        let err = logger.logln(code, &[&"x"]).unwrap_err();
        prop_assert!(err.is_missing_level());
        prop_assert!(buffer.is_empty());
    }
}
