//! Error types for the Sales Report Engine
//!
//! This module defines all error types that can occur while loading a
//! dataset and producing a report. Errors are designed to be descriptive
//! and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Validation Errors**: dataset shape problems, missing strategies
//! - **File I/O Errors**: file not found, permission denied, etc.
//! - **Parse Errors**: malformed JSON, invalid field types, etc.
//!
//! Validation errors are fail-fast and terminal: they are raised before
//! any accumulation begins, and no partial result is produced.

use thiserror::Error;

/// Main error type for the report engine
///
/// Each variant includes enough context to diagnose the problem from
/// the rendered message alone.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// The dataset is missing a required sequence or a sequence is empty
    ///
    /// Raised by validation before any computation starts.
    #[error("Invalid dataset: {reason}")]
    InvalidData {
        /// Description of the shape problem
        reason: String,
    },

    /// A required calculation strategy was not supplied
    ///
    /// Both the revenue and the bonus strategy must be present in the
    /// analysis options. Raised before any computation starts.
    #[error("Missing calculation strategy '{name}'")]
    MissingStrategy {
        /// Name of the absent strategy
        name: String,
    },

    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The input document could not be parsed
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        // serde_json reports line 0 when no position is known
        let line = match error.line() {
            0 => None,
            l => Some(l),
        };

        ReportError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        ReportError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ReportError {
    /// Create an InvalidData error
    pub fn invalid_data(reason: &str) -> Self {
        ReportError::InvalidData {
            reason: reason.to_string(),
        }
    }

    /// Create a MissingStrategy error
    pub fn missing_strategy(name: &str) -> Self {
        ReportError::MissingStrategy {
            name: name.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        ReportError::FileNotFound {
            path: path.display().to_string(),
        }
    }
}
