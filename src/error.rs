//! Error types for the combat log analyzer.
//!
//! This module defines the error hierarchy for all failure cases during
//! log analysis, including missing input files, I/O errors mid-read,
//! malformed alias configuration, and CSV export failures.

use std::path::Path;

use thiserror::Error;

/// The main error type for combat log analysis operations.
///
/// This enum covers all error cases that can occur during a run:
/// - The log file does not exist (fatal, reported before any processing)
/// - File I/O failures while reading the log
/// - Unreadable or malformed alias configuration
/// - CSV export failures (non-fatal; the stdout report is unaffected)
///
/// # Example
///
/// ```
/// use gorgon_dps::error::{ParserError, Result};
///
/// fn example_operation() -> Result<()> {
///     // Operations that may fail return Result<T>
///     Err(ParserError::InvalidAliasConfig {
///         reason: "expected a JSON object".to_string(),
///     })
/// }
/// ```
#[derive(Error, Debug)]
pub enum ParserError {
    /// An I/O error occurred while reading the log file.
    ///
    /// This wraps standard library I/O errors for seamless error propagation
    /// using the `?` operator.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The log file path does not exist.
    ///
    /// Raised before any processing begins; no partial report is produced.
    #[error("Log file not found: {path}")]
    LogNotFound {
        /// The path that was checked.
        path: String,
    },

    /// The alias configuration file is unreadable or malformed.
    ///
    /// Callers treat this as a warning and fall back to the built-in
    /// alias table.
    #[error("Invalid alias config: {reason}")]
    InvalidAliasConfig {
        /// A description of what makes the configuration invalid.
        reason: String,
    },

    /// Writing the CSV export file failed.
    ///
    /// Reported as a non-fatal warning; the stdout report has already been
    /// produced and is unaffected.
    #[error("CSV export to {path} failed: {reason}")]
    ExportFailed {
        /// The output path that could not be written.
        path: String,
        /// A description of the write failure.
        reason: String,
    },
}

impl ParserError {
    /// Creates a `LogNotFound` error for the given path.
    ///
    /// # Arguments
    ///
    /// * `path` - The log file path that does not exist
    ///
    /// # Example
    ///
    /// ```
    /// use std::path::Path;
    /// use gorgon_dps::error::ParserError;
    ///
    /// let err = ParserError::log_not_found(Path::new("Player.log"));
    /// assert!(err.to_string().contains("Player.log"));
    /// ```
    #[must_use]
    pub fn log_not_found(path: &Path) -> Self {
        ParserError::LogNotFound {
            path: path.display().to_string(),
        }
    }

    /// Creates an `ExportFailed` error for the given path and cause.
    ///
    /// # Arguments
    ///
    /// * `path` - The CSV output path
    /// * `reason` - A description of the underlying failure
    #[must_use]
    pub fn export_failed(path: &Path, reason: impl Into<String>) -> Self {
        ParserError::ExportFailed {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for log analysis operations.
///
/// This is a convenience alias that uses `ParserError` as the error type.
pub type Result<T> = std::result::Result<T, ParserError>;
