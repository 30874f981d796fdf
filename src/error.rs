// src/error.rs

use thiserror::Error;

/// Fatal pipeline failures. Any of these aborts the parse; no partial result
/// is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("No lines found in data")]
    NoLines,

    #[error("No records found in data")]
    NoRecords,

    /// Raised in strict mode only. `index` is the record that disagreed with
    /// the one before it.
    #[error("Not all records have the same number of fields:\n{previous}\n{current}")]
    FieldCountMismatch {
        index: usize,
        previous: String,
        current: String,
    },

    #[error("No fields found in data")]
    NoFields,
}

impl ImportError {
    /// Stable name of the error kind, for callers that branch or report on it.
    pub fn name(&self) -> &'static str {
        match self {
            ImportError::NoLines => "NoLines",
            ImportError::NoRecords => "NoRecords",
            ImportError::FieldCountMismatch { .. } => "FieldCountMismatch",
            ImportError::NoFields => "NoFields",
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
