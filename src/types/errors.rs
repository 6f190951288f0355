use std::io;

use thiserror::Error;
use tokio::task::JoinError;

use crate::types::LineNumber;

/// Failures that invalidate a whole statement rather than a single row.
#[derive(Debug, Error)]
pub enum StatementError {
    #[error("Malformed statement: no header row naming most of the columns {expected:?} was found")]
    HeaderNotFound {
        expected: Vec<&'static str>
    },
    #[error("Malformed statement: header on line [{line}] is missing required columns {columns:?}")]
    MissingColumns {
        line: LineNumber,
        columns: Vec<&'static str>
    },
    #[error("Statement error: {0}")]
    Io(#[from] io::Error),
    #[error("Statement error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Statement reader task failed: {0}")]
    ReaderTask(#[from] JoinError)
}

impl StatementError {
    /// True when the file was readable but does not follow the statement layout.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::HeaderNotFound { .. } | Self::MissingColumns { .. })
    }
}
