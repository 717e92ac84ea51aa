//! Error types for the expense tracker
//!
//! This module defines all error types that can occur while recording,
//! undoing and displaying transactions, and while replaying command scripts.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Non-positive amounts, empty categories, undo indices out of range,
//!   totals that would overflow
//! - **Listener Errors**: Unavailable or duplicate registrations, failing listeners
//! - **File I/O Errors**: Script not found, unreadable input, unwritable output
//! - **Script Errors**: Malformed CSV rows, unknown commands

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the expense tracker
///
/// Every rejected operation leaves the model untouched; the variant tells the
/// caller why nothing changed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// Amount is zero or negative
    #[error("Invalid amount {amount}: amount must be greater than zero")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Category is the empty string
    #[error("Category must not be empty")]
    EmptyCategory,

    /// Undo requested for a row that does not exist
    ///
    /// Also returned when the transaction list is empty.
    #[error("Cannot undo row {index}: {len} transaction(s) recorded")]
    UndoIndexOutOfRange {
        /// The requested row index
        index: usize,
        /// Number of transactions at the time of the request
        len: usize,
    },

    /// Running total would exceed the largest representable amount
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Listener reference no longer points to a live listener
    #[error("Listener is not available for registration")]
    ListenerUnavailable,

    /// Listener is already registered with the model
    #[error("Listener is already registered")]
    DuplicateListener,

    /// A listener reported a failure while handling a model update
    #[error("Listener failed: {message}")]
    ListenerFailed {
        /// Description of the failure
        message: String,
    },

    /// Script file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// The malformed row is skipped and the script continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown command or command with missing arguments
    #[error("Invalid command '{command}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidCommand {
        /// The offending command text
        command: String,
        /// Line number where the command appeared (if available)
        line: Option<u64>,
    },
}

impl From<std::io::Error> for TrackerError {
    fn from(error: std::io::Error) -> Self {
        TrackerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for TrackerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        TrackerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl TrackerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        TrackerError::InvalidAmount { amount }
    }

    /// Create an UndoIndexOutOfRange error
    pub fn undo_out_of_range(index: usize, len: usize) -> Self {
        TrackerError::UndoIndexOutOfRange { index, len }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        TrackerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a ListenerFailed error
    pub fn listener_failed(message: impl Into<String>) -> Self {
        TrackerError::ListenerFailed {
            message: message.into(),
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        TrackerError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an InvalidCommand error
    pub fn invalid_command(command: &str, line: Option<u64>) -> Self {
        TrackerError::InvalidCommand {
            command: command.to_string(),
            line,
        }
    }

    /// Whether the error is a rejected user intent rather than an I/O or parse failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TrackerError::InvalidAmount { .. }
                | TrackerError::EmptyCategory
                | TrackerError::UndoIndexOutOfRange { .. }
                | TrackerError::ArithmeticOverflow { .. }
                | TrackerError::ListenerUnavailable
                | TrackerError::DuplicateListener
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_amount(
        TrackerError::InvalidAmount { amount: Decimal::ZERO },
        "Invalid amount 0: amount must be greater than zero"
    )]
    #[case::negative_amount(
        TrackerError::InvalidAmount { amount: Decimal::new(-1250, 2) },
        "Invalid amount -12.50: amount must be greater than zero"
    )]
    #[case::empty_category(TrackerError::EmptyCategory, "Category must not be empty")]
    #[case::undo_out_of_range(
        TrackerError::UndoIndexOutOfRange { index: 3, len: 1 },
        "Cannot undo row 3: 1 transaction(s) recorded"
    )]
    #[case::arithmetic_overflow(
        TrackerError::ArithmeticOverflow { operation: "total".to_string() },
        "Arithmetic overflow in total"
    )]
    #[case::duplicate_listener(TrackerError::DuplicateListener, "Listener is already registered")]
    #[case::file_not_found(
        TrackerError::FileNotFound { path: "script.csv".to_string() },
        "File not found: script.csv"
    )]
    #[case::parse_error_with_line(
        TrackerError::ParseError { line: Some(4), message: "Invalid field".to_string() },
        "CSV parse error at line 4: Invalid field"
    )]
    #[case::parse_error_without_line(
        TrackerError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::invalid_command(
        TrackerError::InvalidCommand { command: "redo".to_string(), line: Some(2) },
        "Invalid command 'redo' at line 2"
    )]
    fn test_error_display(#[case] error: TrackerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_amount(
        TrackerError::invalid_amount(Decimal::ZERO),
        TrackerError::InvalidAmount { amount: Decimal::ZERO }
    )]
    #[case::undo_out_of_range(
        TrackerError::undo_out_of_range(0, 0),
        TrackerError::UndoIndexOutOfRange { index: 0, len: 0 }
    )]
    #[case::arithmetic_overflow(
        TrackerError::arithmetic_overflow("total"),
        TrackerError::ArithmeticOverflow { operation: "total".to_string() }
    )]
    #[case::listener_failed(
        TrackerError::listener_failed("boom"),
        TrackerError::ListenerFailed { message: "boom".to_string() }
    )]
    #[case::invalid_command(
        TrackerError::invalid_command("redo", None),
        TrackerError::InvalidCommand { command: "redo".to_string(), line: None }
    )]
    fn test_helper_functions(#[case] result: TrackerError, #[case] expected: TrackerError) {
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case(TrackerError::EmptyCategory, true)]
    #[case(TrackerError::undo_out_of_range(1, 0), true)]
    #[case(TrackerError::DuplicateListener, true)]
    #[case(TrackerError::arithmetic_overflow("total"), true)]
    #[case(TrackerError::listener_failed("boom"), false)]
    #[case(TrackerError::parse_error(None, "bad"), false)]
    fn test_is_validation(#[case] error: TrackerError, #[case] expected: bool) {
        assert_eq!(error.is_validation(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: TrackerError = io_error.into();
        assert!(matches!(error, TrackerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
