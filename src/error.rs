//! Error types for the Payslip Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading the tax table,
//! coercing employee records, and running a payslip batch.
//!
//! A malformed super rate is deliberately absent from this list: the
//! super-rate parser substitutes the default rate instead of failing.

use thiserror::Error;

/// The main error type for the Payslip Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payslip_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tax_brackets.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/tax_brackets.yaml"
/// );
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

    /// The tax bracket table has a gap, an overlap, or a misplaced
    /// unbounded tier.
    #[error("Invalid tax bracket table: {message}")]
    InvalidTaxTable {
        /// A description of the violated table invariant.
        message: String,
    },

    /// An annual salary was negative or not a finite number.
    #[error("Invalid annual salary {salary}: must be a finite, non-negative amount")]
    InvalidSalary {
        /// The rejected salary.
        salary: f64,
    },

    /// An employee record could not be converted into an employee.
    #[error("Invalid employee on row {row}, field '{field}': {message}")]
    InvalidEmployee {
        /// The 1-based data row number (the header row is not counted).
        row: usize,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A file path was rejected before any work was done.
    #[error("Invalid file path '{path}': {message}")]
    InvalidPath {
        /// The rejected path.
        path: String,
        /// Why the path was rejected.
        message: String,
    },

    /// The tabular input or output could not be read or written.
    #[error("CSV error: {message}")]
    Csv {
        /// A description of the CSV failure.
        message: String,
    },

    /// A file could not be opened or written.
    #[error("I/O error on '{path}': {message}")]
    Io {
        /// The path being accessed.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },
}

impl From<csv::Error> for EngineError {
    fn from(err: csv::Error) -> Self {
        EngineError::Csv {
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
