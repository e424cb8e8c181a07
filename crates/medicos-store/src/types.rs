//! Store-specific types: errors and configuration.

use std::path::PathBuf;

use medicos_types::limits;
use thiserror::Error;

/// A rule violated by roster input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name or surname is empty after trimming.
    #[error("{field} must not be empty")]
    Empty {
        /// The offending field.
        field: &'static str,
    },

    /// Name or surname consists only of digits.
    #[error("{field} must not be numeric: {value}")]
    Numeric {
        /// The offending field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Age, CUIL/CUIT or phone contains something other than digits.
    #[error("{field} must contain only digits: {value}")]
    NotNumeric {
        /// The offending field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// CUIL/CUIT or phone has the wrong number of digits.
    #[error("{field} must have {expected} digits, found {found}")]
    WrongLength {
        /// The offending field.
        field: &'static str,
        /// Required length.
        expected: usize,
        /// Actual length.
        found: usize,
    },
}

/// Errors reported by roster operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Input failed validation.
    #[error("Invalid input: {0}")]
    Invalid(#[from] ValidationError),

    /// Another record already uses this CUIL/CUIT.
    #[error("CUIL/CUIT already registered: {tax_id}")]
    DuplicateTaxId {
        /// The duplicated CUIL/CUIT.
        tax_id: String,
    },

    /// Another record already uses this phone number.
    #[error("Phone already registered: {phone}")]
    DuplicatePhone {
        /// The duplicated phone.
        phone: String,
    },

    /// No record has this CUIL/CUIT.
    #[error("No professional with CUIL/CUIT {tax_id}")]
    NotFound {
        /// The CUIL/CUIT that was looked up.
        tax_id: String,
    },

    /// I/O error reading or writing a roster file.
    #[error("IO error on roster file: {0}")]
    Io(#[from] std::io::Error),

    /// The roster file is not a valid JSON roster.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing error during import.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Import header has too few columns.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name in an import header.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },
}

impl StoreError {
    /// Returns true if the error is a rejection of caller input rather than a
    /// failure to read or write a file.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Invalid(_)
                | Self::DuplicateTaxId { .. }
                | Self::DuplicatePhone { .. }
                | Self::NotFound { .. }
        )
    }
}

/// Result type for roster operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Configuration for a roster store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the JSON roster file.
    pub data_path: PathBuf,
    /// Spaces of indentation in the written JSON.
    pub indent: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(limits::DEFAULT_DATA_FILE),
            indent: 4,
        }
    }
}

impl StoreConfig {
    /// Creates a config for the given roster path with default formatting.
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            data_path: path.into(),
            ..Default::default()
        }
    }
}
