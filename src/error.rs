// src/error.rs
use std::{fmt, path::PathBuf};

/// Coarse failure class, used to label the console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    Schema,
    Filesystem,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Network => write!(f, "network error"),
            ErrorKind::Parse => write!(f, "parse error"),
            ErrorKind::Schema => write!(f, "schema error"),
            ErrorKind::Filesystem => write!(f, "filesystem error"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("network error: GET {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("network error: invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("network error: GET {url} returned http status {status}")]
    HttpStatus { url: String, status: u16 },
    #[error("parse error: {0}")]
    Parse(#[source] csv::Error),
    #[error("parse error: response has no header row")]
    MissingHeader,
    #[error("parse error: record {record} has {found} fields, header has {expected}")]
    RaggedRow {
        record: u64,
        expected: usize,
        found: usize,
    },
    #[error("schema error: expected column '{column}' is missing from the dataset")]
    Schema { column: String },
    #[error("filesystem error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("filesystem error: writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Network { .. }
            | PipelineError::InvalidUrl { .. }
            | PipelineError::HttpStatus { .. } => ErrorKind::Network,
            PipelineError::Parse(_)
            | PipelineError::MissingHeader
            | PipelineError::RaggedRow { .. } => ErrorKind::Parse,
            PipelineError::Schema { .. } => ErrorKind::Schema,
            PipelineError::Io { .. } | PipelineError::Write { .. } => ErrorKind::Filesystem,
        }
    }

    pub(crate) fn missing_column(column: &str) -> Self {
        PipelineError::Schema {
            column: column.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
