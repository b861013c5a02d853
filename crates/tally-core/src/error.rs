//! Error types for the tally library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all tally operations.
///
/// Parse failures are reported through this type and never panic; a
/// [`crate::Tracker`] that receives one keeps its previously loaded state.
#[derive(Error, Debug)]
pub enum TallyError {
    /// The CSV reader could not tokenize the input
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// No header row with enough time-of-day cells was found in a timetable
    #[error("Could not detect time slots (need a row with at least {required} times)")]
    NoTimeSlots { required: usize },
    /// A required column is missing from a tabular file
    #[error("Missing required column '{column}'")]
    MissingColumn { column: String },
    /// The absence file contained no row with a parseable date
    #[error("No valid dates found in absence file")]
    NoValidDates,
    /// No usable totals row was found in an attendance summary
    #[error("No totals row with at least three numbers found in attendance summary")]
    MissingTotals,
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating CSV errors tied to the file that produced them.
pub struct CsvErrorBuilder {
    path: String,
}

impl CsvErrorBuilder {
    /// Create a new CSV error builder for an input location.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: csv::Error) -> TallyError {
        TallyError::Csv {
            path: self.path,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TallyError {
        TallyError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TallyError {
    /// Creates a builder for CSV errors.
    pub fn csv(path: impl Into<String>) -> CsvErrorBuilder {
        CsvErrorBuilder::new(path)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Shorthand for a missing column error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}

/// Result type alias for tally operations
pub type Result<T> = std::result::Result<T, TallyError>;
