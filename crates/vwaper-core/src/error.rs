use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::Field;

/// A trade line that could not be parsed into a record.
///
/// Both variants are the `MalformedRecord` condition: the offending line is
/// skipped and ingestion continues with the next one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("line {line}: malformed record, missing field '{field}'")]
    MissingField { line: usize, field: Field },

    #[error("line {line}: malformed record, field '{field}' has invalid value '{value}'")]
    InvalidField {
        line: usize,
        field: Field,
        value: String,
    },
}

impl RecordError {
    /// 1-based number of the rejected line.
    pub const fn line(&self) -> usize {
        match self {
            Self::MissingField { line, .. } | Self::InvalidField { line, .. } => *line,
        }
    }

    pub const fn field(&self) -> Field {
        match self {
            Self::MissingField { field, .. } | Self::InvalidField { field, .. } => *field,
        }
    }
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("could not read trade source '{}': {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CoreError {
    pub fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}
