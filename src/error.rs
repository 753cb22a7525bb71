//! Error types for the dereplication pipeline
//!
//! Every failure is fatal to a run; there is no partial-result mode.

use std::path::{Path, PathBuf};

use crate::algorithm::validation::ValidationReport;

/// Errors raised by the cagecleaner library.
#[derive(Debug, thiserror::Error)]
pub enum CleanerError {
    /// Malformed clustering, hit or summary table.
    #[error("{input}:{line}: {message}")]
    InputFormat {
        input: String,
        line: usize,
        message: String,
    },

    /// No assembly accession could be extracted from a path-like string.
    #[error("cannot extract an assembly accession from '{0}'")]
    AccessionParse(String),

    /// A required column is absent from a table header.
    #[error("missing required column '{column}' in {table}")]
    MissingColumn { table: String, column: String },

    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// One or more input validation rules failed.
    #[error("input validation failed:\n{0}")]
    Validation(ValidationReport),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CleanerError {
    pub fn input_format(input: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        CleanerError::InputFormat {
            input: input.into(),
            line,
            message: message.into(),
        }
    }

    pub fn missing_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        CleanerError::MissingColumn {
            table: table.into(),
            column: column.into(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        CleanerError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanerError>;
