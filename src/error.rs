//! Error types for the Attendance Punch Reconciliation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during punch reconciliation.

use thiserror::Error;

/// The main error type for the Attendance Punch Reconciliation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A punch row carried a timestamp that could not be parsed.
    ///
    /// At the aggregator level this is non-fatal: the offending row is
    /// logged and dropped rather than aborting the whole day.
    #[error("Invalid punch timestamp: '{value}'")]
    InvalidTimestamp {
        /// The raw timestamp value that failed to parse.
        value: String,
    },

    /// The punch-log store failed while fetching rows for an identifier.
    ///
    /// The aggregator logs this and treats the candidate as having zero
    /// records, continuing with the next identifier candidate.
    #[error("Punch store error for identifier '{identifier}': {message}")]
    StoreError {
        /// The identifier value whose fetch failed.
        identifier: String,
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
